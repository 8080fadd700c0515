//! Optional `tracker.toml` settings read from the base directory.
//!
//! Config keys (TOML): `media_dir`, `log_file`, `selection.adavus`,
//! `selection.items`. Every key is optional and a missing file means defaults;
//! the tracker never writes this file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::app_dirs;
use crate::catalog::PracticeCategory;
use crate::resolver::SelectionPolicy;

/// Default filename of the optional settings file.
pub const CONFIG_FILE_NAME: &str = "tracker.toml";
const DEFAULT_MEDIA_DIR: &str = "music";
const DEFAULT_LOG_FILE: &str = "practice_log.csv";

/// Errors that may occur while loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base directory could not be resolved.
    #[error("Cannot locate the application directory: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
}

/// Settings as written in `tracker.toml`; relative paths are unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default)]
    pub selection: SelectionSettings,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            media_dir: default_media_dir(),
            log_file: default_log_file(),
            selection: SelectionSettings::default(),
        }
    }
}

/// Which selection policy each category uses when several tracks match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSettings {
    #[serde(default = "default_adavus_policy")]
    pub adavus: SelectionPolicy,
    #[serde(default = "default_items_policy")]
    pub items: SelectionPolicy,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            adavus: default_adavus_policy(),
            items: default_items_policy(),
        }
    }
}

impl SelectionSettings {
    pub fn policy_for(&self, category: PracticeCategory) -> SelectionPolicy {
        match category {
            PracticeCategory::Adavus => self.adavus,
            PracticeCategory::Items => self.items,
        }
    }
}

/// Settings with every path made absolute against the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    /// Root holding one media subfolder per category.
    pub media_root: PathBuf,
    /// CSV file receiving practice entries.
    pub log_path: PathBuf,
    pub selection: SelectionSettings,
}

impl TrackerSettings {
    /// Folder searched for a category's tracks.
    pub fn media_folder(&self, category: PracticeCategory) -> PathBuf {
        self.media_root.join(category.media_subfolder())
    }
}

impl TrackerConfig {
    /// Anchor relative paths at `base`.
    pub fn resolve(self, base: &Path) -> TrackerSettings {
        TrackerSettings {
            media_root: base.join(self.media_dir),
            log_path: base.join(self.log_file),
            selection: self.selection,
        }
    }
}

/// Load `tracker.toml` from the base directory, falling back to defaults.
pub fn load_or_default() -> Result<TrackerSettings, ConfigError> {
    let base = app_dirs::base_dir()?;
    let config = load_from(&base.join(CONFIG_FILE_NAME))?;
    let settings = config.resolve(&base);
    info!(
        "Media root {}, practice log {}",
        settings.media_root.display(),
        settings.log_path.display()
    );
    Ok(settings)
}

/// Parse a config file, returning defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<TrackerConfig, ConfigError> {
    if !path.exists() {
        return Ok(TrackerConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

fn default_media_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MEDIA_DIR)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_adavus_policy() -> SelectionPolicy {
    SelectionPolicy::First
}

fn default_items_policy() -> SelectionPolicy {
    SelectionPolicy::Random
}
