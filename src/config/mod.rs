//! Configuration types and layered resolution for nami.
//!
//! Candidate file locations follow git's conventions (git-config(1), FILES):
//! system-wide, then user-specific, then instance-specific, with later files
//! overriding earlier ones key-by-key. `paths` builds the exact locations
//! per platform and `loader` performs the merge.

mod loader;
mod parse;
mod paths;
mod store;

pub use store::ConfigStore;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Resolved configuration: the merged store plus derived convenience flags.
///
/// Produced by [`Config::resolve`]; callers hold and thread this value
/// through their own context. Resolution is synchronous and returns a fresh
/// value each time, so re-resolving fully replaces prior state and a failed
/// resolution leaves any previously held `Config` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Merged section/key/value store, highest-precedence file winning.
    pub store: ConfigStore,
    /// Whether output should be colorized (`[color] ui`, default `true`).
    pub colorize: bool,
}

impl Default for Config {
    /// The pre-resolution state: empty store, colorize off.
    ///
    /// `colorize` defaults to `false` here, not `true`, so code running
    /// before configuration has been read does not emit color.
    fn default() -> Self {
        Self {
            store: ConfigStore::default(),
            colorize: false,
        }
    }
}

impl Config {
    /// Reads and merges all configuration files for the project rooted at
    /// `base_dir`.
    ///
    /// Candidate locations are system-wide, then user-specific, then
    /// `<base_dir>/nami/config`, merged in that order; missing files are
    /// skipped. Use
    /// [`find_topdir`](crate::find_topdir) to compute `base_dir`.
    ///
    /// # Errors
    ///
    /// Fails on an unsupported platform, an unknown home directory, a
    /// malformed config file, or an unreadable existing file. See
    /// [`Config::resolve_paths`] for the skip policy.
    pub fn resolve(base_dir: &std::path::Path) -> Result<Self, ConfigError> {
        let files = paths::candidate_paths(base_dir)?;
        Self::resolve_paths(&files)
    }
}
