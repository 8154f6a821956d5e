//! Doesn't He Have Intern-Elves For This?: sort nice strings from naughty ones

use aoc_common::Splitter;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["2015", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Splitter::new()
            .delimiter("\n")
            .discard_empty(true)
            .tokens(input)
            .map(str::trim)
            .collect())
    }
}

const FORBIDDEN: [(u8, u8); 4] = [(b'a', b'b'), (b'c', b'd'), (b'p', b'q'), (b'x', b'y')];

/// At least three vowels, a doubled letter and no forbidden pair
fn is_nice(word: &str) -> bool {
    let bytes = word.as_bytes();
    let vowels = bytes.iter().filter(|&&b| b"aeiou".contains(&b)).count();
    let pairs = || bytes.iter().copied().tuple_windows::<(u8, u8)>();

    vowels >= 3 && pairs().any(|(a, b)| a == b) && !pairs().any(|pair| FORBIDDEN.contains(&pair))
}

/// A pair appearing twice without overlap and a letter repeated with one
/// letter between
fn is_nicer(word: &str) -> bool {
    let bytes = word.as_bytes();

    let mut first_seen: HashMap<(u8, u8), usize> = HashMap::new();
    let repeated_pair = bytes
        .iter()
        .copied()
        .tuple_windows::<(u8, u8)>()
        .enumerate()
        .any(|(index, pair)| index >= *first_seen.entry(pair).or_insert(index) + 2);

    let sandwich = bytes
        .iter()
        .tuple_windows::<(&u8, &u8, &u8)>()
        .any(|(a, _, c)| a == c);

    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|word| is_nice(word)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|word| is_nicer(word)).count().to_string())
    }
}
