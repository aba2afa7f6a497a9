//! Application configuration
//!
//! Loaded from an optional `config.toml` plus `ORATIO_`-prefixed
//! environment overrides. API keys missing from both fall back to the
//! conventional per-vendor environment variables.

use std::path::Path;

use ai_text::TextGenConfig;
use domain::ApiKeys;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
}

/// SQLite database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    "oratio.db".to_string()
}

const fn default_max_connections() -> u32 {
    4
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider endpoints and models
    #[serde(default)]
    pub providers: TextGenConfig,

    /// Per-provider API credentials
    #[serde(default)]
    pub api_keys: ApiKeys,

    /// History database settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment
    ///
    /// The file is optional; `ORATIO_` environment variables override
    /// file values (for example `ORATIO_API_KEYS__OPENAI`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file or environment values fail
    /// to deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new("config.toml"));

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("ORATIO").separator("__"))
            .build()?;

        let mut app_config: Self = settings.try_deserialize()?;
        app_config.fill_missing_keys(|name| std::env::var(name).ok());
        Ok(app_config)
    }

    /// Fill absent API keys from the conventional vendor variables
    fn fill_missing_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (slot, var) in [
            (&mut self.api_keys.claude, "ANTHROPIC_API_KEY"),
            (&mut self.api_keys.openai, "OPENAI_API_KEY"),
            (&mut self.api_keys.gemini, "GEMINI_API_KEY"),
        ] {
            if slot.as_deref().is_none_or(|k| k.trim().is_empty()) {
                if let Some(value) = lookup(var) {
                    debug!(var, "Using API key from environment");
                    *slot = Some(value);
                }
            }
        }
    }
}
