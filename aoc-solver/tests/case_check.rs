//! Tests for checking solvers against expected answers

use aoc_solver::{
    AocCase, AocParser, AocSolver, CheckError, ParseError, PartSolver, SolveError, check,
};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Sum and maximum of whitespace-separated integers
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumMax;

impl AocParser for SumMax {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values: Vec<i64> = aoc_common::split_int(input.trim(), " ", 10, true)?;
        if values.is_empty() {
            return Err(ParseError::MissingData("no numbers".into()));
        }
        Ok(values)
    }
}

impl PartSolver<1> for SumMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let max = aoc_common::max_of(shared.iter().copied())
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))?;
        Ok(max.to_string())
    }
}

#[test]
fn test_matching_answers() {
    let case = AocCase::with_answers("10 54 543", "607", "543");
    check::<SumMax>(&case).unwrap();
}

#[test]
fn test_unset_parts_are_skipped() {
    let case = AocCase::new("1 2 3").expect_part(2, "3");
    check::<SumMax>(&case).unwrap();
}

#[test]
fn test_mismatch_reports_part() {
    let case = AocCase::with_answers("1 2 3", "6", "4");
    match check::<SumMax>(&case) {
        Err(CheckError::Mismatch {
            part,
            expected,
            actual,
        }) => {
            assert_eq!(part, 2);
            assert_eq!(expected, "4");
            assert_eq!(actual, "3");
        }
        other => panic!("Expected mismatch, got {:?}", other),
    }
}

#[test]
fn test_parse_failure() {
    let case = AocCase::with_answers("1 two 3", "", "");
    assert!(matches!(
        check::<SumMax>(&case),
        Err(CheckError::Parse(ParseError::Split(_)))
    ));
    let case = AocCase::with_answers("   ", "", "");
    assert!(matches!(
        check::<SumMax>(&case),
        Err(CheckError::Parse(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_case_from_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("entry.txt");
    fs::write(&path, "4 5 6\n").unwrap();

    let case = AocCase::from_path(&path).unwrap().expect_part(1, "15");
    assert_eq!(case.input, "4 5 6\n");
    check::<SumMax>(&case).unwrap();

    assert!(matches!(
        AocCase::from_path(temp.path().join("missing.txt")),
        Err(CheckError::Input(_))
    ));
}

#[test]
#[should_panic(expected = "parts 1 and 2")]
fn test_expect_part_three_panics() {
    let _ = AocCase::new("").expect_part(3, "x");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* non-empty list, the true sum and max always check out
    #[test]
    fn prop_true_answers_pass(values in prop::collection::vec(-1000i64..1000, 1..20)) {
        let input = values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        let sum: i64 = values.iter().sum();
        let max = values.iter().max().unwrap();
        let case = AocCase::with_answers(input, sum.to_string(), max.to_string());
        prop_assert!(check::<SumMax>(&case).is_ok());
    }
}
