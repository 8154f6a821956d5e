//! Puzzle inputs paired with their expected answers

use crate::error::CheckError;
use crate::solver::{Solver, SolverExt};
use std::path::Path;
use tracing::debug;

/// An input and the answers it should produce, one slot per part
///
/// Parts without an expectation are skipped by [`check`].
///
/// ```
/// use aoc_solver::AocCase;
///
/// let case = AocCase::new("^>v<").expect_part(1, "4").expect_part(2, "3");
/// assert_eq!(case.expected(1), Some("4"));
/// assert_eq!(case.expected(3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AocCase {
    pub input: String,
    pub expected: [Option<String>; 2],
}

impl AocCase {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: [None, None],
        }
    }

    /// Case with answers for both parts
    pub fn with_answers(
        input: impl Into<String>,
        part1: impl Into<String>,
        part2: impl Into<String>,
    ) -> Self {
        Self::new(input).expect_part(1, part1).expect_part(2, part2)
    }

    /// Load the input from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        Ok(Self::new(aoc_common::read_input(path)?))
    }

    /// Set the expected answer for `part` (1 or 2)
    ///
    /// # Panics
    /// Panics if `part` is not 1 or 2.
    pub fn expect_part(mut self, part: u8, answer: impl Into<String>) -> Self {
        assert!(matches!(part, 1 | 2), "cases hold answers for parts 1 and 2, got {part}");
        self.expected[usize::from(part - 1)] = Some(answer.into());
        self
    }

    pub fn expected(&self, part: u8) -> Option<&str> {
        let slot = usize::from(part.checked_sub(1)?);
        self.expected.get(slot)?.as_deref()
    }
}

/// Parse the case input with `S` and compare every expected answer
///
/// Parts run in order against the same shared data, as they would in a
/// real run, so later parts see whatever earlier parts cached.
///
/// # Returns
/// * `Ok(())` - Every expected answer matched
/// * `Err(CheckError)` - Parsing failed, a part failed, or an answer differed
pub fn check<S: Solver>(case: &AocCase) -> Result<(), CheckError> {
    let mut shared = S::parse(&case.input)?;
    for part in 1..=2u8 {
        let Some(expected) = case.expected(part) else {
            continue;
        };
        let result = S::solve_timed(&mut shared, part)
            .map_err(|source| CheckError::Solve { part, source })?;
        debug!(part, elapsed = %result.duration(), "checked part");

        let actual = result.answer;
        if actual != expected {
            return Err(CheckError::Mismatch {
                part,
                expected: expected.to_string(),
                actual,
            });
        }
    }
    Ok(())
}
