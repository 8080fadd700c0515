//! Application directory helpers anchored next to the running executable.
//!
//! The tracker is a portable tool: media, the practice log and the optional
//! config all live beside the binary. `NATYA_TRACKER_HOME` overrides the base
//! for tests or relocated installs.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Folder name used under the platform data directory when the executable
/// location cannot be resolved.
pub const APP_DIR_NAME: &str = "natya-tracker";
/// Environment variable that overrides the base directory.
pub const HOME_ENV_VAR: &str = "NATYA_TRACKER_HOME";

static BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither the executable location nor a platform data directory is known.
    #[error("No suitable base directory available for application files")]
    NoBaseDir,
    /// Failed to create an application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the base directory that holds media, the practice log and config.
///
/// The directory is not created; it normally already exists because the
/// executable lives in it.
pub fn base_dir() -> Result<PathBuf, AppDirError> {
    if let Some(path) = BASE_OVERRIDE.lock().ok().and_then(|guard| guard.clone()) {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(HOME_ENV_VAR).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(dir) = executable_dir() {
        return Ok(dir);
    }
    BaseDirs::new()
        .map(|dirs| dirs.data_local_dir().join(APP_DIR_NAME))
        .ok_or(AppDirError::NoBaseDir)
}

/// Return the diagnostics log directory inside the base directory, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let path = base_dir()?.join("logs");
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|parent| parent.to_path_buf())
}

#[cfg(test)]
fn set_base_override(path: PathBuf) {
    let mut guard = BASE_OVERRIDE
        .lock()
        .expect("base override mutex poisoned");
    *guard = Some(path);
}

#[cfg(test)]
fn clear_base_override() {
    let mut guard = BASE_OVERRIDE
        .lock()
        .expect("base override mutex poisoned");
    *guard = None;
}
