//! Configuration management for the regional weather analytics backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WX_ prefix, `__` between keys
//!    (e.g. `WX_SERVER__PORT=8080`)

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Record store configuration
    pub storage: StorageConfig,

    /// Forecast generation parameters
    pub forecast: ForecastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON document per record kind
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ForecastConfig {
    /// Days generated when a request does not specify a horizon
    pub days_ahead: u32,

    /// Most recent observations considered per region
    pub history_window: usize,

    /// Most recent observations used for trend extrapolation
    pub trend_window: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WX_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("storage.data_dir", "Data")?
            .set_default("forecast.days_ahead", 7)?
            .set_default("forecast.history_window", 30)?
            .set_default("forecast.trend_window", 7)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WX_ prefix)
            .add_source(
                Environment::with_prefix("WX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.forecast.validate()?;
        Ok(config)
    }
}

impl ForecastConfig {
    /// Both windows must hold at least one observation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_window == 0 {
            return Err(ConfigError::Message(
                "forecast.history_window must be at least 1".to_string(),
            ));
        }
        if self.trend_window == 0 {
            return Err(ConfigError::Message(
                "forecast.trend_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days_ahead: 7,
            history_window: 30,
            trend_window: 7,
        }
    }
}
