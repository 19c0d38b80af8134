//! TOML configuration: types with serde defaults, loading and validation.

mod loader;
mod types;

pub use loader::{ConfigError, CONFIRMATION_SECS_RANGE, TOKEN_ENV_VAR};
pub use types::{ApiConfig, Config, ThemeConfig, VoteConfig};
