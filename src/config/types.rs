//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::{EngineError, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Win probability model parameters
    #[serde(default)]
    pub model: ModelConfig,
    /// Fair-value strategy thresholds
    #[serde(default)]
    pub strategy: StrategyConfig,
    /// Event feed configuration
    #[serde(default)]
    pub feed: FeedConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

impl AppConfig {
    /// Reject parameter combinations the strategy cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.model.steepness <= 0.0 {
            return Err(EngineError::config("model.steepness must be positive"));
        }
        if self.model.regulation_seconds <= 0.0 {
            return Err(EngineError::config(
                "model.regulation_seconds must be positive",
            ));
        }
        if self.strategy.entry_discount <= 0.0 || self.strategy.entry_discount >= 1.0 {
            return Err(EngineError::config(
                "strategy.entry_discount must be in (0, 1)",
            ));
        }
        if self.strategy.exit_premium <= 1.0 {
            return Err(EngineError::config(
                "strategy.exit_premium must be greater than 1",
            ));
        }
        if self.strategy.order_quantity <= Decimal::ZERO {
            return Err(EngineError::config(
                "strategy.order_quantity must be positive",
            ));
        }
        Ok(())
    }
}

/// Win probability model parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Logistic steepness applied to the score differential
    #[serde(default = "default_steepness")]
    pub steepness: f64,
    /// Regulation game length in seconds (48 minutes of basketball)
    #[serde(default = "default_regulation_seconds")]
    pub regulation_seconds: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            steepness: default_steepness(),
            regulation_seconds: default_regulation_seconds(),
        }
    }
}

fn default_steepness() -> f64 {
    0.1
}

fn default_regulation_seconds() -> f64 {
    48.0 * 60.0
}

/// Fair-value strategy thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Enter when market probability falls below model * entry_discount
    #[serde(default = "default_entry_discount")]
    pub entry_discount: f64,
    /// Exit when market probability rises above model * exit_premium
    #[serde(default = "default_exit_premium")]
    pub exit_premium: f64,
    /// Contracts per order
    #[serde(default = "default_order_quantity")]
    pub order_quantity: Decimal,
    /// Capital assumed at the start of a game
    #[serde(default = "default_starting_capital")]
    pub starting_capital: Decimal,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            entry_discount: default_entry_discount(),
            exit_premium: default_exit_premium(),
            order_quantity: default_order_quantity(),
            starting_capital: default_starting_capital(),
        }
    }
}

fn default_entry_discount() -> f64 {
    0.90
}

fn default_exit_premium() -> f64 {
    1.05
}

fn default_order_quantity() -> Decimal {
    Decimal::from(100)
}

fn default_starting_capital() -> Decimal {
    Decimal::from(100_000)
}

/// Event feed configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Path to a recorded game file (NDJSON, one event per line)
    #[serde(default)]
    pub replay_path: Option<String>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Buffer size of the event channel between feed and engine
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_channel_capacity() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_template_constants() {
        let config = AppConfig::default();
        assert_eq!(config.model.steepness, 0.1);
        assert_eq!(config.model.regulation_seconds, 2880.0);
        assert_eq!(config.strategy.entry_discount, 0.90);
        assert_eq!(config.strategy.exit_premium, 1.05);
        assert_eq!(config.strategy.order_quantity, dec!(100));
        assert_eq!(config.strategy.starting_capital, dec!(100000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = AppConfig::default();
        config.strategy.entry_discount = 1.2;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.strategy.exit_premium = 0.95;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_steepness() {
        let mut config = AppConfig::default();
        config.model.steepness = 0.0;
        assert!(config.validate().is_err());
    }
}
