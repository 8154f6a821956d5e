//! Advent of Code 2015
//!
//! Day 4 is missing: it needs an MD5 implementation.

pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_5;
