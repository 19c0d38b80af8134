use serde::{Deserialize, Serialize};

use crate::content::SanitizerConfig;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub vote: VoteConfig,
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Knowledge-base API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the CRM API (e.g., "https://crm.example.com/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Voting widget behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteConfig {
    /// How long the "thanks for your feedback" notice stays up (default: 3).
    #[serde(default = "default_confirmation_secs")]
    pub confirmation_secs: u64,
}

/// Colours as `#rrggbb` hex or ratatui colour names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_border")]
    pub border: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_ok")]
    pub ok: String,
    #[serde(default = "default_error")]
    pub error: String,
    #[serde(default = "default_highlight")]
    pub highlight: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_confirmation_secs() -> u64 {
    3
}

fn default_accent() -> String {
    "#da7756".to_string()
}

fn default_border() -> String {
    "#404040".to_string()
}

fn default_text() -> String {
    "#e5e5e5".to_string()
}

fn default_muted() -> String {
    "#6b7280".to_string()
}

fn default_ok() -> String {
    "#22c55e".to_string()
}

fn default_error() -> String {
    "#ef4444".to_string()
}

fn default_highlight() -> String {
    "#262626".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            vote: VoteConfig::default(),
            sanitizer: SanitizerConfig::default(),
            theme: ThemeConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            confirmation_secs: default_confirmation_secs(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            border: default_border(),
            text: default_text(),
            muted: default_muted(),
            ok: default_ok(),
            error: default_error(),
            highlight: default_highlight(),
        }
    }
}
