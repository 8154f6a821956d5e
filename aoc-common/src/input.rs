//! Reading puzzle inputs from disk

use crate::error::InputError;
use crate::split::split;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a whole input file into a string
///
/// # Returns
/// * `Ok(String)` - The file content, untouched
/// * `Err(InputError::Read)` - The file is missing or unreadable
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}

/// Read an input file as lines split on `'\n'`
///
/// With `discard_empty` set, blank lines (including the one after a final
/// newline) are dropped; otherwise every line is kept.
pub fn read_lines(path: impl AsRef<Path>, discard_empty: bool) -> Result<Vec<String>, InputError> {
    read_input(path).map(|content| split(&content, "\n", discard_empty))
}
