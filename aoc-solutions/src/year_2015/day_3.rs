//! Perfectly Spherical Houses in a Vacuum: count houses visited on a grid walk

use aoc_common::{Direction, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["2015", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Direction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim_end()
            .chars()
            .map(|glyph| {
                Direction::try_from(glyph).map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect()
    }
}

/// Walk `walkers` positions in turn from the origin, returning every house
/// any of them visited
fn visited(moves: &[Direction], walkers: usize) -> HashSet<Point> {
    let mut positions = vec![Point::default(); walkers];
    let mut houses = HashSet::from([Point::default()]);

    for (turn, direction) in moves.iter().enumerate() {
        let walker = &mut positions[turn % walkers];
        *walker = direction.advance(*walker);
        houses.insert(*walker);
    }

    debug!(walkers, houses = houses.len(), "walk finished");
    houses
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 1).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 2).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocCase, CheckError, check};

    #[test]
    fn test_examples() {
        check::<Solver>(&AocCase::with_answers("^>v<", "4", "3")).unwrap();
        check::<Solver>(&AocCase::with_answers("^v^v^v^v^v", "2", "11")).unwrap();
        check::<Solver>(&AocCase::new(">").expect_part(1, "2")).unwrap();
        check::<Solver>(&AocCase::new("^v").expect_part(2, "3")).unwrap();
    }

    #[test]
    fn test_empty_walk_visits_origin() {
        check::<Solver>(&AocCase::with_answers("\n", "1", "1")).unwrap();
    }

    #[test]
    fn test_unknown_glyph() {
        assert!(matches!(
            check::<Solver>(&AocCase::with_answers("^>x", "", "")),
            Err(CheckError::Parse(ParseError::InvalidFormat(_)))
        ));
    }
}
