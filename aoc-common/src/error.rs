//! Error types for the common utilities

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for typed splitting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// A token could not be parsed as an integer in the requested radix
    #[error("Invalid integer token {token:?} at index {index} (radix {radix}): {source}")]
    InvalidInteger {
        /// Position of the token among the emitted tokens
        index: usize,
        token: String,
        radix: u32,
        #[source]
        source: ParseIntError,
    },
}

/// Error type for direction glyph conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("Unknown direction glyph {0:?}")]
    UnknownGlyph(char),
}

/// Error type for reading puzzle inputs and locating the repository root
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No ancestor of the start directory carries the root marker
    #[error("No {marker} found in {} or any of its parents", .start.display())]
    RootNotFound {
        marker: &'static str,
        start: PathBuf,
    },
    /// The running executable path is unavailable
    #[error("Cannot locate current executable: {0}")]
    CurrentExe(#[source] std::io::Error),
}
