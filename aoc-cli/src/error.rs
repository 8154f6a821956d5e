//! Error types for the CLI

use aoc_common::InputError;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Puzzle input could not be read
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver lookup, parse or solve failure
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Result receiver hung up before every result was sent
    #[error("Channel send error")]
    ChannelSend,

    /// Logging could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<aoc_solver::SolveError> for CliError {
    fn from(error: aoc_solver::SolveError) -> Self {
        CliError::Solver(error.into())
    }
}
