//! Filesystem locations for configuration and trace output.
//!
//! This module centralizes every path the application touches. Locations
//! resolve through the `directories` crate to platform conventions (XDG on
//! Linux, Library on macOS, AppData on Windows), with environment overrides
//! for sandboxed and test environments.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::domain::{PixquestError, Result};

const QUALIFIER: &str = "";
const ORGANIZATION: &str = "";
const APPLICATION: &str = "pixquest";

const CONFIG_DIR_ENV: &str = "PIXQUEST_CONFIG_DIR";
const DATA_DIR_ENV: &str = "PIXQUEST_DATA_DIR";

/// Name of the configuration file inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Name of the OTLP trace file inside the data directory.
const TRACE_FILE: &str = "pixquest-otlp.json";

/// Returns the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        PixquestError::Config("unable to determine platform directories".to_string())
    })
}

/// Resolves an override directory from an environment variable.
///
/// An empty value is treated the same as an unset variable so callers can
/// use shell defaults without worrying about stray assignments.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Returns the directory holding the configuration file.
///
/// `PIXQUEST_CONFIG_DIR` overrides the platform location.
///
/// # Errors
///
/// Returns a configuration error when no home directory can be determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Returns the directory holding trace output.
///
/// `PIXQUEST_DATA_DIR` overrides the platform location.
///
/// # Errors
///
/// Returns a configuration error when no home directory can be determined.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Returns the full path of the configuration file.
///
/// # Examples
///
/// ```
/// use pixquest::infrastructure::paths::config_file_path;
///
/// let path = config_file_path()?;
/// assert!(path.ends_with("config.toml"));
/// # Ok::<(), pixquest::PixquestError>(())
/// ```
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Returns the full path of the rotating OTLP trace file.
pub fn trace_file_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(TRACE_FILE))
}

/// Creates the parent directory of `path` when it does not exist yet.
///
/// # Errors
///
/// Returns an I/O error when directory creation fails.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_inside_the_config_dir() {
        let path = config_file_path().unwrap();
        assert!(path.ends_with("config.toml"));
        assert!(path.starts_with(config_dir().unwrap()));
    }

    #[test]
    fn trace_file_lives_inside_the_data_dir() {
        let path = trace_file_path().unwrap();
        assert!(path.ends_with("pixquest-otlp.json"));
        assert!(path.starts_with(data_dir().unwrap()));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("traces.json");

        ensure_parent_dir(&nested).unwrap();

        assert!(nested.parent().unwrap().is_dir());
        assert!(!nested.exists());
    }

    #[test]
    fn ensure_parent_dir_accepts_existing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("traces.json");

        ensure_parent_dir(&file).unwrap();
        ensure_parent_dir(&file).unwrap();
    }
}
