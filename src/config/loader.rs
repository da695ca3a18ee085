//! File probing and precedence merging.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::{parse, store::ConfigStore, Config};
use crate::constants::{COLORIZE_DEFAULT, COLOR_SECTION, COLOR_UI_KEY};
use crate::error::ConfigError;

impl Config {
    /// Reads and merges an explicit candidate list, lowest precedence first.
    ///
    /// Each existing file is parsed and its pairs written into the running
    /// store in list order, so later files override earlier ones key-by-key
    /// while sections accumulate across files. The colorize flag is derived
    /// from the merged result (`[color] ui`, default `true`).
    ///
    /// Skip policy: a path that is not a regular file (absent, a directory,
    /// or unstatable) is skipped, and so is a file the process lacks
    /// permission to open, matching the original tool's behavior of reading
    /// whichever candidates it can. Any other failure while reading an
    /// existing file is an error.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when any file is malformed (the whole
    /// resolution aborts; nothing partial is returned),
    /// [`ConfigError::InvalidBool`] when `[color] ui` holds a non-boolean,
    /// and [`ConfigError::Io`] for other read failures, including non-UTF-8
    /// content.
    pub fn resolve_paths(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut store = ConfigStore::default();

        for path in files {
            if !path.is_file() {
                debug!(path = %path.display(), "config file absent, skipping");
                continue;
            }
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                    debug!(path = %path.display(), "config file unreadable, skipping");
                    continue;
                }
                Err(err) => {
                    return Err(ConfigError::Io {
                        path: path.clone(),
                        source: err,
                    })
                }
            };

            for (section, pairs) in parse::parse(&text, path)? {
                for (key, value) in pairs {
                    store.set(&section, &key, value);
                }
            }
            debug!(path = %path.display(), "loaded config file");
        }

        let colorize = store.get_bool(COLOR_SECTION, COLOR_UI_KEY, COLORIZE_DEFAULT)?;
        Ok(Self { store, colorize })
    }
}
