//! I Was Told There Would Be No Math: wrapping paper and ribbon for presents

use anyhow::{Context, bail};
use aoc_common::{Splitter, arg_max};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["2015", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    length: u32,
    width: u32,
    height: u32,
}

impl Present {
    fn sides(&self) -> [u32; 3] {
        [self.length, self.width, self.height]
    }

    /// The two sides left after dropping the longest one
    fn shortest_pair(&self) -> (u32, u32) {
        let sides = self.sides();
        let longest = arg_max(sides).unwrap_or(0);
        let (a, b) = match longest {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        (sides[a], sides[b])
    }

    fn paper(&self) -> u32 {
        let Present {
            length: l,
            width: w,
            height: h,
        } = *self;
        let (a, b) = self.shortest_pair();
        2 * (l * w + w * h + h * l) + a * b
    }

    fn ribbon(&self) -> u32 {
        let (a, b) = self.shortest_pair();
        2 * (a + b) + self.sides().iter().product::<u32>()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Present>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let dimensions = Splitter::new().delimiter("x");
        Splitter::new()
            .delimiter("\n")
            .discard_empty(true)
            .tokens(input)
            .enumerate()
            .map(|(index, line)| {
                parse_present(&dimensions, line.trim())
                    .with_context(|| format!("line {}", index + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_present(dimensions: &Splitter<'_>, line: &str) -> anyhow::Result<Present> {
    match dimensions.ints::<u32>(line)?.as_slice() {
        &[length, width, height] => Ok(Present {
            length,
            width,
            height,
        }),
        other => bail!("expected 3 dimensions in {line:?}, got {}", other.len()),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        debug!(presents = shared.len(), "wrapping");
        Ok(shared.iter().map(Present::paper).sum::<u32>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Present::ribbon).sum::<u32>().to_string())
    }
}
