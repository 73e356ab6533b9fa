use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `api.key`.
pub const API_KEY_ENV: &str = "SKYWINDOW_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/skywindow/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("skywindow").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    /// - Returns an error if reading or parsing fails.
    ///
    /// The result is not validated here: environment and command-line
    /// overrides still apply, so call [`Config::validate`] on the merged value.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Applies [`API_KEY_ENV`] from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api.key = key.trim().to_string();
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The access key is not empty
    /// - The endpoint is an http(s) URL
    /// - The UI tick rate is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.key must not be empty".to_string(),
            });
        }

        let endpoint = &self.api.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.endpoint '{}' must be an http(s) URL", endpoint),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
