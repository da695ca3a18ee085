//! Candidate configuration file locations, per platform.
//!
//! Returns `~/.config/nami/config` style paths on Linux
//! (`XDG_CONFIG_HOME/nami/config`), the fixed `/etc` and `/usr/local/etc`
//! files elsewhere on unix, and `%PROGRAMDATA%\nami\config` on Windows.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME, CONFIG_FILENAME, SYSTEM_CONFIG_LINUX, SYSTEM_CONFIG_MACOS, USER_CONFIG_FILENAME,
    XDG_FALLBACK_DIRNAME,
};
use crate::error::ConfigError;

/// Platform family, as far as config locations are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Detects the compile-target platform family.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedPlatform`] on any other target,
    /// since no system-wide config location is defined for it.
    pub(super) fn current() -> Result<Self, ConfigError> {
        if cfg!(target_os = "linux") {
            Ok(Self::Linux)
        } else if cfg!(target_os = "macos") {
            Ok(Self::MacOs)
        } else if cfg!(target_os = "windows") {
            Ok(Self::Windows)
        } else {
            Err(ConfigError::UnsupportedPlatform {
                os: env::consts::OS.to_string(),
            })
        }
    }
}

/// Returns all candidate config file paths for the project rooted at
/// `base_dir`, lowest precedence first.
///
/// Reads `XDG_CONFIG_HOME` and `PROGRAMDATA` from the environment and the
/// home directory from the platform; the actual list construction is the
/// pure [`candidate_paths_from`].
///
/// # Errors
///
/// Fails when the platform is unsupported or the home directory cannot be
/// determined.
pub(super) fn candidate_paths(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let platform = Platform::current()?;
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    let xdg_config_home = env_path(env::var_os("XDG_CONFIG_HOME"));
    let program_data = env_path(env::var_os("PROGRAMDATA"));
    Ok(candidate_paths_from(
        platform,
        &home,
        xdg_config_home.as_deref(),
        program_data.as_deref(),
        base_dir,
    ))
}

/// An environment variable's value as a path; unset and empty are both
/// `None`, so an empty `XDG_CONFIG_HOME` falls back like an unset one.
fn env_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Builds the ordered candidate list from explicit inputs.
///
/// Lowest precedence first: system-wide paths, then `~/.namiconfig`, then
/// `<base_dir>/nami/config` last. On Linux the system tier is
/// `/etc/namiconfig` followed by `$XDG_CONFIG_HOME/nami/config`
/// (`~/.config/nami/config` when `xdg_config_home` is `None`). On Windows
/// an unset `PROGRAMDATA` means the system path cannot be formed and is
/// omitted.
pub(super) fn candidate_paths_from(
    platform: Platform,
    home: &Path,
    xdg_config_home: Option<&Path>,
    program_data: Option<&Path>,
    base_dir: &Path,
) -> Vec<PathBuf> {
    let mut files = system_paths(platform, home, xdg_config_home, program_data);
    files.push(home.join(USER_CONFIG_FILENAME));
    files.push(base_dir.join(APP_NAME).join(CONFIG_FILENAME));
    files
}

/// System-wide tier of the candidate list.
fn system_paths(
    platform: Platform,
    home: &Path,
    xdg_config_home: Option<&Path>,
    program_data: Option<&Path>,
) -> Vec<PathBuf> {
    match platform {
        Platform::Linux => {
            let xdg = xdg_config_home
                .map(Path::to_path_buf)
                .unwrap_or_else(|| home.join(XDG_FALLBACK_DIRNAME));
            vec![
                PathBuf::from(SYSTEM_CONFIG_LINUX),
                xdg.join(APP_NAME).join(CONFIG_FILENAME),
            ]
        }
        Platform::MacOs => vec![PathBuf::from(SYSTEM_CONFIG_MACOS)],
        Platform::Windows => match program_data {
            Some(pd) => vec![pd.join(APP_NAME).join(CONFIG_FILENAME)],
            None => Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_paths_with_xdg_set() {
        let files = candidate_paths_from(
            Platform::Linux,
            Path::new("/home/ada"),
            Some(Path::new("/home/ada/xdg")),
            None,
            Path::new("/work/proj"),
        );
        assert_eq!(
            files,
            vec![
                PathBuf::from("/etc/namiconfig"),
                PathBuf::from("/home/ada/xdg/nami/config"),
                PathBuf::from("/home/ada/.namiconfig"),
                PathBuf::from("/work/proj/nami/config"),
            ]
        );
    }

    #[test]
    fn test_env_path_unset_and_empty_are_none() {
        assert_eq!(env_path(None), None);
        assert_eq!(env_path(Some(OsString::new())), None);
        assert_eq!(
            env_path(Some(OsString::from("/home/ada/xdg"))),
            Some(PathBuf::from("/home/ada/xdg"))
        );
    }

    #[test]
    fn test_linux_empty_xdg_falls_back_to_dot_config() {
        let xdg = env_path(Some(OsString::new()));
        let files = candidate_paths_from(
            Platform::Linux,
            Path::new("/home/ada"),
            xdg.as_deref(),
            None,
            Path::new("/work/proj"),
        );
        assert_eq!(files[1], PathBuf::from("/home/ada/.config/nami/config"));
    }

    #[test]
    fn test_linux_xdg_defaults_to_dot_config() {
        let files = candidate_paths_from(
            Platform::Linux,
            Path::new("/home/ada"),
            None,
            None,
            Path::new("/work/proj"),
        );
        assert_eq!(files[1], PathBuf::from("/home/ada/.config/nami/config"));
    }

    #[test]
    fn test_macos_paths() {
        let files = candidate_paths_from(
            Platform::MacOs,
            Path::new("/Users/ada"),
            None,
            None,
            Path::new("/work/proj"),
        );
        assert_eq!(
            files,
            vec![
                PathBuf::from("/usr/local/etc/namiconfig"),
                PathBuf::from("/Users/ada/.namiconfig"),
                PathBuf::from("/work/proj/nami/config"),
            ]
        );
    }

    #[test]
    fn test_windows_paths() {
        let files = candidate_paths_from(
            Platform::Windows,
            Path::new("C:/Users/ada"),
            None,
            Some(Path::new("C:/ProgramData")),
            Path::new("C:/work/proj"),
        );
        assert_eq!(files.len(), 3);
        assert_eq!(files[0], Path::new("C:/ProgramData").join("nami").join("config"));
        assert_eq!(files[1], Path::new("C:/Users/ada").join(".namiconfig"));
        assert_eq!(files[2], Path::new("C:/work/proj").join("nami").join("config"));
    }

    #[test]
    fn test_windows_without_programdata_omits_system_path() {
        let files = candidate_paths_from(
            Platform::Windows,
            Path::new("C:/Users/ada"),
            None,
            None,
            Path::new("C:/work/proj"),
        );
        assert_eq!(files.len(), 2);
        assert_eq!(files[0], Path::new("C:/Users/ada").join(".namiconfig"));
    }

    #[test]
    fn test_instance_path_is_always_last() {
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            let files = candidate_paths_from(
                platform,
                Path::new("/home/ada"),
                None,
                Some(Path::new("/pd")),
                Path::new("/work/proj"),
            );
            assert_eq!(
                files.last().unwrap(),
                &Path::new("/work/proj").join("nami").join("config")
            );
        }
    }
}
