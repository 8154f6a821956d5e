//! Locating the repository root from a marker file

use crate::error::InputError;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// File whose presence marks the repository root
pub const ROOT_MARKER: &str = ".root_file";

/// First directory among `start` and its ancestors that contains [`ROOT_MARKER`]
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(ROOT_MARKER).is_file())
        .map(Path::to_path_buf)
}

/// Repository root, searched upwards from the running executable
///
/// The search runs once per process; later calls return the cached answer.
pub fn root_path() -> Result<PathBuf, InputError> {
    static ROOT: OnceLock<PathBuf> = OnceLock::new();

    if let Some(root) = ROOT.get() {
        return Ok(root.clone());
    }

    let exe = std::env::current_exe().map_err(InputError::CurrentExe)?;
    let start = exe.parent().unwrap_or(&exe);
    let root = find_root_from(start).ok_or_else(|| InputError::RootNotFound {
        marker: ROOT_MARKER,
        start: start.to_path_buf(),
    })?;
    debug!(root = %root.display(), "found repository root");

    Ok(ROOT.get_or_init(|| root).clone())
}
