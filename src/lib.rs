//! Layered configuration resolution for the nami CLI.
//!
//! nami follows git's conventions for configuration file locations (see the
//! FILES section of git-config(1)): zero or more INI-style files are read
//! across three precedence tiers and merged into a single [`ConfigStore`],
//! where values from later (higher-precedence) files override earlier ones.
//!
//! The tiers, lowest precedence first:
//!
//! - **System-wide**: `/etc/namiconfig` and `$XDG_CONFIG_HOME/nami/config`
//!   on Linux, `/usr/local/etc/namiconfig` on macOS,
//!   `%PROGRAMDATA%\nami\config` on Windows.
//! - **User-specific**: `~/.namiconfig` on every platform.
//! - **Instance-specific**: `<topdir>/nami/config`, where `<topdir>` is the
//!   project root found by [`find_topdir`].
//!
//! Resolution returns an explicit [`Config`] value holding the merged store
//! and the derived `colorize` flag (`[color] ui`, defaulting to `true`).
//! There is no process-wide state; callers thread the value through their
//! own context.
//!
//! ```no_run
//! use nami_config::{find_topdir, Config};
//!
//! # fn main() -> Result<(), nami_config::ConfigError> {
//! let topdir = find_topdir(&std::env::current_dir().unwrap())?;
//! let config = Config::resolve(&topdir)?;
//! if config.colorize {
//!     // colorized output enabled
//! }
//! let editor = config.store.get_or("core", "editor", "vi");
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod discovery;
mod error;

pub use config::{Config, ConfigStore};
pub use discovery::find_topdir;
pub use error::ConfigError;
