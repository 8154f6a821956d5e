//! Error types for the solver library

use aoc_common::{InputError, SplitError};
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A typed split rejected a token
    #[error(transparent)]
    Split(#[from] SplitError),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver has no implementation for this part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number exceeds the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for creating and running registered solvers
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}

/// Error type for checking a solver against expected answers
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to load case: {0}")]
    Input(#[from] InputError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Part {part} failed: {source}")]
    Solve {
        part: u8,
        #[source]
        source: SolveError,
    },
    #[error("Part {part}: expected {expected:?}, got {actual:?}")]
    Mismatch {
        part: u8,
        expected: String,
        actual: String,
    },
}
