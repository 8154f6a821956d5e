//! Not Quite Lisp: follow `(` up and `)` down through a building

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["2015", "parsing"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim_end())
    }
}

/// Floor change for one instruction; anything else is ignored
fn step(instruction: char) -> i32 {
    match instruction {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let floor: i32 = shared.chars().map(step).sum();
        Ok(floor.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let position = shared
            .chars()
            .scan(0, |floor, instruction| {
                *floor += step(instruction);
                Some(*floor)
            })
            .position(|floor| floor < 0);

        debug!(?position, "first basement visit");
        Ok(position.map_or_else(|| "never".to_string(), |index| (index + 1).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocCase, check};

    #[test]
    fn test_examples() {
        let examples = [
            ("(())", "0", "never"),
            ("()()", "0", "never"),
            ("(((", "3", "never"),
            ("(()(()(", "3", "never"),
            ("))(((((", "3", "1"),
            ("())", "-1", "3"),
            ("))(", "-1", "1"),
            (")))", "-3", "1"),
            (")())())", "-3", "1"),
        ];

        for (input, part1, part2) in examples {
            check::<Solver>(&AocCase::with_answers(input, part1, part2))
                .unwrap_or_else(|e| panic!("{input}: {e}"));
        }
    }

    #[test]
    fn test_trailing_newline_ignored() {
        check::<Solver>(&AocCase::with_answers("())\n", "-1", "3")).unwrap();
    }
}
