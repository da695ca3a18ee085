//! Project root discovery.
//!
//! A nami project is identified by a `.nami` marker directory at its root.
//! [`find_topdir`] locates that root by searching upward from a starting
//! directory, the same way git locates `.git`.

use std::path::{Path, PathBuf};

use crate::constants::MARKER_DIRNAME;
use crate::error::ConfigError;

/// Searches upward from `start` for the directory containing the `.nami`
/// marker and returns it.
///
/// The returned path is the project root expected as `base_dir` by
/// [`Config::resolve`](crate::Config::resolve).
///
/// # Errors
///
/// Returns [`ConfigError::NotInProject`] when the filesystem root is reached
/// without finding a marker.
pub fn find_topdir(start: &Path) -> Result<PathBuf, ConfigError> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(MARKER_DIRNAME).is_dir() {
            return Ok(dir);
        }
        // Stop at the filesystem root
        if !dir.pop() {
            return Err(ConfigError::NotInProject {
                start: start.to_path_buf(),
            });
        }
    }
}
