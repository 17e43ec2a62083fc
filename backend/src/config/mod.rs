//! Configuration management for the BodySense backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/<APP_ENV>.toml)
//! 3. Environment variables (prefix: BODYSENSE__)
//! 4. `PORT` and `APP_ENV` for drop-in hosting compatibility

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Development mode: verbose, human-readable logging
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Simulated data source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed; every request then returns the same readings
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            debug: false,
            simulation: SimulationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on APP_ENV
    /// 3. Environment variables with BODYSENSE__ prefix
    /// 4. `PORT`, then `APP_ENV=development` forcing debug on
    pub fn load() -> Result<Self> {
        let config_file = format!("config/{}.toml", Self::environment());

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., BODYSENSE__SIMULATION__SEED=42 sets simulation.seed
            .add_source(
                config::Environment::with_prefix("BODYSENSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: AppConfig = config.try_deserialize()?;

        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?;
        }
        if Self::is_development() {
            config.debug = true;
        }

        Ok(config)
    }

    /// Deployment environment name.
    ///
    /// APP_ENV wins; FLASK_ENV is still honored for older deployment
    /// scripts. Defaults to `production`.
    pub fn environment() -> String {
        resolve_environment(env::var("APP_ENV").ok(), env::var("FLASK_ENV").ok())
    }

    /// Check if running in development mode
    pub fn is_development() -> bool {
        Self::environment() == "development"
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn resolve_environment(app_env: Option<String>, flask_env: Option<String>) -> String {
    app_env
        .or(flask_env)
        .unwrap_or_else(|| "production".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(!config.debug);
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_environment_resolution() {
        assert_eq!(resolve_environment(None, None), "production");
        assert_eq!(
            resolve_environment(None, Some("development".to_string())),
            "development"
        );
        assert_eq!(
            resolve_environment(Some("staging".to_string()), Some("development".to_string())),
            "staging"
        );
    }

    #[test]
    fn test_bind_address() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 8081;
        assert_eq!(config.bind_address(), "127.0.0.1:8081");
    }

    #[test]
    fn test_defaults_survive_config_round_trip() {
        // The defaults are fed back through the config crate as the lowest layer
        let layered = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap();
        let config: AppConfig = layered.try_deserialize().unwrap();
        assert_eq!(config.server.port, 5000);
        assert!(config.simulation.seed.is_none());
    }
}
