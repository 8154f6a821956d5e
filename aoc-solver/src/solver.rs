//! Core solver traits

use crate::error::{ParseError, SolveError};
use chrono::{DateTime, TimeDelta, Utc};
use std::ops::RangeInclusive;

/// Parsing half of a solver: turns raw puzzle input into shared data
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(aoc_common::split_int(input.trim(), "\n", 10, true)?)
///     }
/// }
///
/// assert_eq!(Depths::parse("199\n200\n208\n").unwrap(), [199, 200, 208]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// The lifetime lets zero-copy solvers borrow from the input (`&'a str`,
    /// `Vec<&'a str>`); owned data simply ignores it.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle, selected at compile time by `N`
///
/// `#[derive(AocSolver)]` turns a set of `PartSolver<1>..=PartSolver<N>`
/// implementations into a [`Solver`].
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part; `shared` may be mutated to cache work for later parts
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver for one year/day
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Floors {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => {
///                 let up = shared.matches('(').count() as i64;
///                 let down = shared.matches(')').count() as i64;
///                 Ok((up - down).to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Floors::parse("(()(()(").unwrap();
/// assert_eq!(Floors::solve_part(&mut shared, 1).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range checking and timing, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Part numbers this solver answers
    fn parts() -> RangeInclusive<u8> {
        1..=Self::PARTS
    }

    /// Like [`Solver::solve_part`], but rejects parts outside [`SolverExt::parts`]
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match Self::parts().contains(&part) {
            true => Self::solve_part(shared, part),
            false => Err(SolveError::PartOutOfRange(part)),
        }
    }

    /// Checked solve stamped with wall-clock start and end
    ///
    /// ```
    /// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
    ///
    /// struct Len;
    ///
    /// impl AocParser for Len {
    ///     type SharedData<'a> = &'a str;
    ///
    ///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
    ///         Ok(input)
    ///     }
    /// }
    ///
    /// impl Solver for Len {
    ///     const PARTS: u8 = 1;
    ///
    ///     fn solve_part(s: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
    ///         Ok(s.len().to_string())
    ///     }
    /// }
    ///
    /// let result = Len::solve_timed(&mut "abc", 1).unwrap();
    /// assert_eq!((result.part, result.answer.as_str()), (1, "3"));
    /// assert!(result.solve_end >= result.solve_start);
    /// ```
    fn solve_timed(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = Self::solve_part_checked_range(shared, part)?;
        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end: Utc::now(),
        })
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

/// Answer for one part, with when solving started and ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}
