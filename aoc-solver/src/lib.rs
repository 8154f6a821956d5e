//! Advent of Code Solver Library
//!
//! A small, type-safe harness for puzzle solvers: parse once, solve each part
//! against the parsed data, and look solvers up by year and day.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`], [`PartSolver`] and [`Solver`] for writing solvers
//! - [`SolverInstance`] / [`DynSolver`] for running any solver with timing
//! - [`SolverRegistryBuilder`] and [`SolverPlugin`] for registration, manual or
//!   automatic through `#[derive(AutoRegisterSolver)]`
//! - [`AocCase`] and [`check`] for testing solvers against known answers
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{check, AocCase, AocParser, AocSolver, ParseError, PartSolver, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Wrapping;
//!
//! impl AocParser for Wrapping {
//!     type SharedData<'a> = Vec<Vec<u32>>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(aoc_common::try_split_and_transform(
//!             input,
//!             |line| aoc_common::split_int(line, "x", 10, false),
//!             "\n",
//!             true,
//!         )?)
//!     }
//! }
//!
//! impl PartSolver<1> for Wrapping {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().map(|dims| dims.iter().product::<u32>()).sum::<u32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Wrapping {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let case = AocCase::with_answers("2x3x4\n1x1x10\n", "34", "2");
//! check::<Wrapping>(&case).unwrap();
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive `&mut SharedData`, so a part can cache work for the next one
//! (for example an `Option<Summary>` filled with `get_or_insert_with`).

mod case;
mod error;
mod instance;
mod registry;
mod solver;

pub use case::{AocCase, check};
pub use error::{CheckError, ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver,
    SolverFactory, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, SolveResult, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
