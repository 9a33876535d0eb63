//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{EngineError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with COURTSIDE_)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    // Add default config file if it exists
    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // Add environment variables with COURTSIDE_ prefix
    builder = builder.add_source(
        Environment::with_prefix("COURTSIDE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| EngineError::Configuration(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| EngineError::Configuration(e.to_string()))?;

    app_config.validate()?;

    Ok(app_config)
}

/// Load configuration from environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    // Pick up a .env file when present
    dotenvy::dotenv().ok();
    load_config(None)
}
