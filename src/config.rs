//! Persistent client settings stored as TOML in the app directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Server the client talks to when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
/// Static asset holding the feature names.
pub const DEFAULT_FEATURES_PATH: &str = "/static/sample-features.json";
/// Prediction endpoint.
pub const DEFAULT_PREDICT_PATH: &str = "/predict";

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable config directory found")]
    NoConfigDir,
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Where the prediction server lives and which paths it serves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Scheme, host and port of the server, e.g. `http://127.0.0.1:8000`.
    pub server_url: String,
    /// Path of the JSON array of feature names.
    pub features_path: String,
    /// Path of the prediction endpoint.
    pub predict_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            features_path: DEFAULT_FEATURES_PATH.to_string(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
        }
    }
}

impl ServerSettings {
    /// Settings pointing at `server_url` with the default paths.
    pub fn for_server(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Replace blank values with their defaults and trim whitespace.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        normalize_field(&mut self.server_url, defaults.server_url);
        normalize_field(&mut self.features_path, defaults.features_path);
        normalize_field(&mut self.predict_path, defaults.predict_path);
        self
    }
}

fn normalize_field(value: &mut String, default: String) {
    let trimmed = value.trim();
    *value = if trimmed.is_empty() {
        default
    } else {
        trimmed.to_string()
    };
}

/// Top-level contents of `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub server: ServerSettings,
}

impl AppSettings {
    pub fn normalized(self) -> Self {
        Self {
            server: self.server.normalized(),
        }
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the default location, returning defaults if missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Persist settings to the default location.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
