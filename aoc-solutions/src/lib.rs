//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year, one module per day. Each one derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find them.

#[cfg(feature = "year-2015")]
pub mod year_2015;
