//! Configuration loading and validation.
//!
//! Settings come from a TOML file with an optional environment override for
//! the data store access key (`CERBERUS_ANON_KEY`), so the key can stay out
//! of checked-in config files.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Error, Result};

/// Environment variable that overrides `backend.anon_key`.
pub const ANON_KEY_ENV: &str = "CERBERUS_ANON_KEY";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote data store and auth provider endpoints.
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted data store (REST and auth live under it).
    pub base_url: String,
    /// Publishable access key sent with every request.
    #[serde(default)]
    pub anon_key: String,
}

/// Health probe endpoint.
#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub base_url: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        if let Ok(key) = std::env::var(ANON_KEY_ENV) {
            if !key.is_empty() {
                config.backend.anon_key = key;
            }
        }

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(Error::Config(ConfigError::MissingField {
                field: "base_url",
            }));
        }
        url::Url::parse(&self.backend.base_url).map_err(|e| {
            Error::Config(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            })
        })?;
        if self.backend.anon_key.is_empty() {
            return Err(Error::Config(ConfigError::MissingField {
                field: "anon_key",
            }));
        }
        if self.health.base_url.is_empty() {
            return Err(Error::Config(ConfigError::MissingField {
                field: "health.base_url",
            }));
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
