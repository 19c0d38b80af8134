use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::content::CONTENT_STRIPPED_TAGS;
use crate::ui::theme::Theme;

/// Accepted range for `vote.confirmation_secs`.
pub const CONFIRMATION_SECS_RANGE: std::ops::RangeInclusive<u64> = 1..=3600;

/// Environment variable overriding `api.token`.
pub const TOKEN_ENV_VAR: &str = "KB_API_TOKEN";

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
    /// `~/.config/kb-reader/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, or the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("kb-reader").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - `KB_API_TOKEN` overrides the token from the file.
    ///
    /// The result is not validated: callers layer CLI overrides first and
    /// then call [`Config::validate`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Config::default()
        };

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                config.api.token = Some(token);
            }
        }

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is an http(s) URL
    /// - The vote confirmation lasts between 1 second and 1 hour
    /// - At least one tag is allowed and none of them is content-stripped
    /// - Every theme colour parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url must be an http(s) URL, got '{}'", base_url),
            });
        }

        if !CONFIRMATION_SECS_RANGE.contains(&self.vote.confirmation_secs) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "vote.confirmation_secs must be between {} and {}, got {}",
                    CONFIRMATION_SECS_RANGE.start(),
                    CONFIRMATION_SECS_RANGE.end(),
                    self.vote.confirmation_secs
                ),
            });
        }

        if self.sanitizer.tags.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "sanitizer.tags must allow at least one tag".to_string(),
            });
        }

        if let Some(tag) = self
            .sanitizer
            .tags
            .iter()
            .find(|tag| CONTENT_STRIPPED_TAGS.contains(&tag.to_ascii_lowercase().as_str()))
        {
            return Err(ConfigError::ValidationError {
                message: format!("sanitizer.tags must not allow '{}'", tag),
            });
        }

        Theme::from_config(&self.theme)
            .map_err(|message| ConfigError::ValidationError { message })?;

        Ok(())
    }
}
