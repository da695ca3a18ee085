//! Centralized constants for nami configuration handling.
//!
//! All fixed paths, filenames, and lookup names live here so they can be
//! changed in one place.

/// Application name used in directory paths (`nami/config`, `.namiconfig`).
pub const APP_NAME: &str = "nami";

/// System-wide configuration file on Linux.
pub const SYSTEM_CONFIG_LINUX: &str = "/etc/namiconfig";

/// System-wide configuration file on macOS (`$(prefix) = /usr/local`).
pub const SYSTEM_CONFIG_MACOS: &str = "/usr/local/etc/namiconfig";

/// User-specific configuration filename, relative to the home directory.
pub const USER_CONFIG_FILENAME: &str = ".namiconfig";

/// Filename of the per-tier config file inside a `nami` directory
/// (`$XDG_CONFIG_HOME/nami/config`, `<topdir>/nami/config`).
pub const CONFIG_FILENAME: &str = "config";

/// XDG fallback directory under `$HOME` when `XDG_CONFIG_HOME` is unset.
pub const XDG_FALLBACK_DIRNAME: &str = ".config";

/// Marker directory identifying a nami project root.
pub const MARKER_DIRNAME: &str = ".nami";

// --- Derived settings ---

/// Section holding output-color settings.
pub const COLOR_SECTION: &str = "color";

/// Key controlling colorized output within [`COLOR_SECTION`].
pub const COLOR_UI_KEY: &str = "ui";

/// Colorize default when `[color] ui` is absent from every file.
pub const COLORIZE_DEFAULT: bool = true;
