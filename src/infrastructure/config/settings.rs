//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for deployment-specific values like `HF_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use cognita::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::model::ModelConfig;
use super::paths;
use super::server::ServerConfig;
use crate::domain::GenerationConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding the hub access token.
pub const ENV_HF_TOKEN: &str = "HF_TOKEN";
/// Environment variable overriding `model.id`.
pub const ENV_MODEL_ID: &str = "COGNITA_MODEL_ID";
/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "COGNITA_PORT";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Pretrained model source.
    #[serde(default)]
    pub model: ModelConfig,

    /// Decoding settings.
    ///
    /// Defaults to greedy decoding with at most 512 new tokens.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies environment overrides from the process environment, then
    /// validates.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - An environment override cannot be parsed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content using `env` for overrides.
    ///
    /// # Errors
    ///
    /// Same as [`parse_toml`](Self::parse_toml).
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from an explicit path, or from the default path if it exists.
    ///
    /// Without an explicit path and without `~/.cognita/config.toml`, the
    /// built-in defaults are used (environment overrides still apply).
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path cannot be read, or if parsing or
    /// validation fails.
    #[allow(clippy::result_large_err)]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = paths::default_config();
        if default_path.is_file() {
            return Self::load(default_path);
        }
        Self::parse_toml("")
    }

    #[allow(clippy::result_large_err)]
    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|value| !value.is_empty());

        self.model.hf_token = env(ENV_HF_TOKEN);
        if let Some(id) = env(ENV_MODEL_ID) {
            self.model.id = id;
        }
        if let Some(port) = env(ENV_PORT) {
            self.server.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    field: ENV_PORT,
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] or [`ConfigError::InvalidValue`].
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "body_limit_bytes",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.model.id.is_empty() && self.model.local_dir.is_none() {
            return Err(ConfigError::MissingField { field: "model.id" }.into());
        }

        let generation = &self.generation;
        if generation.max_new_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_new_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if generation.do_sample && generation.temperature <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: "must be greater than 0 when sampling".to_string(),
            }
            .into());
        }
        if let Some(p) = generation.top_p {
            if p <= 0.0 || p > 1.0 {
                return Err(ConfigError::InvalidValue {
                    field: "top_p",
                    reason: "must be in (0, 1]".to_string(),
                }
                .into());
            }
        }
        if generation.repeat_penalty.is_some_and(|p| p <= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "repeat_penalty",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected \"pretty\" or \"json\", got {:?}",
                    self.logging.format
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if serialization fails.
    #[allow(clippy::result_large_err)]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
