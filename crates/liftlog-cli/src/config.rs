//! Application configuration.
//!
//! An optional `liftlog.toml` in the platform config folder:
//! - macOS: ~/Library/Application Support/com.liftlog.Lift-Log/
//! - Windows: %APPDATA%/liftlog/Lift Log/config/
//! - Linux: ~/.config/liftlog/
//!
//! ```toml
//! data_dir = "/home/me/training"
//! storage_key = "workouts"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use liftlog_persistence::StoreConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "liftlog";
const APP_NAME: &str = "Lift Log";
const CONFIG_FILENAME: &str = "liftlog.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a data directory; pass --data-dir")]
    NoDataDir,
}

/// Settings read from `liftlog.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder holding the workout data file.
    pub data_dir: Option<PathBuf>,
    /// Key (file stem) the collection is stored under.
    pub storage_key: Option<String>,
}

impl AppConfig {
    /// Apply command-line overrides on top of the file settings.
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, storage_key: Option<String>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if storage_key.is_some() {
            self.storage_key = storage_key;
        }
        self
    }

    /// Data directory, falling back to the platform data folder.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(ConfigError::NoDataDir)
    }

    pub fn store_config(&self) -> StoreConfig {
        match &self.storage_key {
            Some(key) => StoreConfig::default().with_storage_key(key.clone()),
            None => StoreConfig::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Default location of `liftlog.toml`.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load configuration from `path`.
///
/// Returns defaults if:
/// - The file doesn't exist
/// - The file cannot be read or parsed
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file {:?}: {}, using defaults", path, e);
                AppConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {:?}, using defaults", path);
            AppConfig::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read config file {:?}: {}, using defaults", path, e);
            AppConfig::default()
        }
    }
}
