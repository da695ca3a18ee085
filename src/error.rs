//! Error types for configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration resolution and project discovery.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The host platform has no known system-wide config location.
    #[error("unsupported platform '{os}': no system-wide config location is known")]
    UnsupportedPlatform {
        /// Operating system name as reported by `std::env::consts::OS`.
        os: String,
    },

    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    /// A configuration file exists but is malformed.
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        message: String,
    },

    /// A configuration value could not be interpreted as a boolean.
    #[error("invalid boolean value '{value}' for {section}.{key}")]
    InvalidBool {
        section: String,
        key: String,
        value: String,
    },

    /// A file system error occurred while reading an existing config file.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `.nami` marker directory was found while searching upward.
    #[error("no nami project found in '{start}' or any parent directory")]
    NotInProject {
        /// Directory the upward search started from.
        start: PathBuf,
    },
}
