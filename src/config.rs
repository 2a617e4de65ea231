//! Exchange configuration.
//!
//! Loaded from TOML. Every field is optional and falls back to the defaults
//! below.
//!
//! ```toml
//! asset = "BMB"
//! base = "mUSDT"
//! slippage_tolerance = "0.01"
//! resting_capacity = 1000
//! ```

use std::path::Path;

use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::price::DEFAULT_SLIPPAGE_TOLERANCE;
use crate::types::TradingPair;

/// Slots pre-allocated per book side
pub const DEFAULT_RESTING_CAPACITY: usize = 1000;

/// Largest pre-allocation accepted per book side. Sides still grow past it.
pub const MAX_RESTING_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    pub asset: String,
    pub base: String,
    pub slippage_tolerance: Decimal,
    pub resting_capacity: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        let pair = TradingPair::default();
        Self {
            asset: pair.asset,
            base: pair.base,
            slippage_tolerance: DEFAULT_SLIPPAGE_TOLERANCE,
            resting_capacity: DEFAULT_RESTING_CAPACITY,
        }
    }
}

impl ExchangeConfig {
    /// Default configuration for the given pair
    pub fn for_pair(asset: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            base: base.into(),
            ..Self::default()
        }
    }

    pub fn with_slippage_tolerance(mut self, tolerance: Decimal) -> Self {
        self.slippage_tolerance = tolerance;
        self
    }

    pub fn pair(&self) -> TradingPair {
        TradingPair::new(self.asset.clone(), self.base.clone())
    }

    /// Check labels, tolerance and capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.asset.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("asset"));
        }
        if self.base.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("base"));
        }
        if self.slippage_tolerance.is_sign_negative() || self.slippage_tolerance >= Decimal::ONE {
            return Err(ConfigError::InvalidSlippage(self.slippage_tolerance));
        }
        if self.resting_capacity > MAX_RESTING_CAPACITY {
            return Err(ConfigError::InvalidCapacity(self.resting_capacity));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ExchangeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Like [`ExchangeConfig::from_file`], but falls back to defaults when the
    /// file is missing or invalid.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Something went wrong reading the config file {}, using defaults: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = ExchangeConfig::default();

        assert_eq!(config.asset, "BMB");
        assert_eq!(config.base, "mUSDT");
        assert_eq!(config.slippage_tolerance, dec!(0.01));
        assert_eq!(config.resting_capacity, DEFAULT_RESTING_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = ExchangeConfig::from_toml_str(
            r#"
            asset = "BTC"
            base = "USD"
            slippage_tolerance = "0.005"
            "#,
        )
        .unwrap();

        assert_eq!(config.pair(), TradingPair::new("BTC", "USD"));
        assert_eq!(config.slippage_tolerance, dec!(0.005));
        assert_eq!(config.resting_capacity, DEFAULT_RESTING_CAPACITY);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(ExchangeConfig::from_toml_str("").unwrap(), ExchangeConfig::default());
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let err = ExchangeConfig::from_toml_str(r#"slippage_tolerance = "1""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSlippage(_)));

        let err = ExchangeConfig::from_toml_str(r#"slippage_tolerance = "-0.01""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSlippage(_)));
    }

    #[test]
    fn test_rejects_empty_labels() {
        let err = ExchangeConfig::from_toml_str(r#"asset = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLabel("asset")));
    }

    #[test]
    fn test_rejects_oversized_capacity() {
        let err =
            ExchangeConfig::from_toml_str("resting_capacity = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity(9223372036854775807)));

        let config = ExchangeConfig::from_toml_str("resting_capacity = 1048576").unwrap();
        assert_eq!(config.resting_capacity, MAX_RESTING_CAPACITY);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ExchangeConfig::from_toml_str("asset = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ExchangeConfig::from_file_or_default("/nonexistent/batch-matcher.toml");
        assert_eq!(config, ExchangeConfig::default());
    }
}
