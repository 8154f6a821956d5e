//! Parsed solvers behind a trait object, so the registry can hand out any of them

use crate::error::{ParseError, SolveError};
use crate::solver::{SolveResult, Solver, SolverExt};
use chrono::{TimeDelta, Utc};
use std::ops::RangeInclusive;
use tracing::debug;

/// Shared data of solver `S` for one puzzle input, plus how long parsing took
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn parse(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let started = Utc::now();
        let shared = S::parse(input)?;
        let parse_duration = Utc::now() - started;
        debug!(year, day, bytes = input.len(), %parse_duration, "parsed input");

        Ok(Self {
            year,
            day,
            shared,
            parse_duration,
        })
    }
}

/// A parsed puzzle, solvable part by part
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for result in solver.solve_all() {
///         match result {
///             Ok(r) => println!("Part {}: {} ({})", r.part, r.answer, r.duration()),
///             Err(e) => println!("{e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, rejecting parts the solver does not have
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> RangeInclusive<u8>;

    fn parse_duration(&self) -> TimeDelta;

    /// Every part in order against the same shared data
    fn solve_all(&mut self) -> Vec<Result<SolveResult, SolveError>> {
        self.parts().map(|part| self.solve(part)).collect()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let result = S::solve_timed(&mut self.shared, part)?;
        debug!(
            year = self.year,
            day = self.day,
            part,
            answer = %result.answer,
            elapsed = %result.duration(),
            "solved part"
        );
        Ok(result)
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> RangeInclusive<u8> {
        S::parts()
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Part 1 stores the word count, part 2 reads it back
    struct Words;

    impl crate::AocParser for Words {
        type SharedData<'a> = (Vec<&'a str>, Option<usize>);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok((input.split_whitespace().collect(), None))
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.1.insert(shared.0.len()).to_string()),
                _ => shared
                    .1
                    .map(|count| (count * 2).to_string())
                    .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into())),
            }
        }
    }

    #[test]
    fn test_solve_all_shares_state_in_order() {
        let mut instance = SolverInstance::<Words>::parse(2015, 7, "a b c").unwrap();
        let answers: Vec<String> = instance
            .solve_all()
            .into_iter()
            .map(|result| result.unwrap().answer)
            .collect();
        assert_eq!(answers, ["3", "6"]);
    }

    #[test]
    fn test_metadata() {
        let instance = SolverInstance::<Words>::parse(2016, 12, "").unwrap();
        assert_eq!((instance.year(), instance.day()), (2016, 12));
        assert_eq!(instance.parts(), 1..=2);
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_out_of_range_part() {
        let mut instance = SolverInstance::<Words>::parse(2016, 12, "x").unwrap();
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert!(matches!(instance.solve(2), Err(SolveError::SolveFailed(_))));
    }
}
