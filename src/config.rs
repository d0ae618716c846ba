//! Persistent application settings stored as TOML under the app directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::app_dirs;
use crate::prediction::validation::InputLimits;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Prediction endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";
/// Pause before dispatch so the busy indicator never flickers.
pub const DEFAULT_UX_DELAY_MS: u64 = 600;
/// Upper bound for prediction response bodies.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Settings loaded from `config.toml`. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub network: NetworkSettings,
    #[serde(default)]
    pub limits: InputLimits,
}

/// Where and how predictions are requested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionSettings {
    /// Absolute http(s) URL of the prediction endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Minimum time the busy state is shown before the request is sent.
    #[serde(default = "default_ux_delay_ms")]
    pub ux_delay_ms: u64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            ux_delay_ms: default_ux_delay_ms(),
        }
    }
}

/// Transport deadlines and limits. Unset deadlines are not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkSettings {
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: None,
            read_timeout_secs: None,
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_ux_delay_ms() -> u64 {
    DEFAULT_UX_DELAY_MS
}

fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
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
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid prediction endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("Prediction endpoint {endpoint:?} must use http or https")]
    UnsupportedScheme { endpoint: String },
    #[error("Limits for {field} must be finite with min <= max")]
    InvalidLimits { field: &'static str },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

impl AppSettings {
    /// Reject settings that cannot produce a working client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.prediction.endpoint)?;
        let ranges = [
            ("percentage", &self.limits.percentage),
            ("salt_count", &self.limits.salt_count),
        ];
        for (field, range) in ranges {
            if !range.is_well_formed() {
                return Err(ConfigError::InvalidLimits { field });
            }
        }
        Ok(())
    }
}

/// Check that `endpoint` is an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::UnsupportedScheme {
            endpoint: endpoint.to_string(),
        }),
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    load_settings_from(&path)
}

/// Load and validate settings from a specific file.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: AppSettings = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
