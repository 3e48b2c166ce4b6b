//! Engine configuration
//!
//! Rates that the settlement rules are parameterized by. The defaults are
//! the standard third-party rules: half of the overnight allowance is billed
//! (driver only, no co-driver), a 1% retention is deducted from gross, and
//! week 1 of a fortnight is its first seven days.

use crate::core::calendar::DEFAULT_FIRST_WEEK_DAYS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basis points in 100%
pub const BPS_PER_UNIT: i64 = 10_000;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Config parse failed: {0}")]
    Parse(String),
}

/// Settlement rule parameters
///
/// # Example
/// ```
/// use freight_settlement_core_rs::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{"retention_rate_bps": 200}"#).unwrap();
/// assert_eq!(config.retention_rate_bps, 200);
/// assert_eq!(config.overnight_billable_percent, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Share of the full overnight allowance billed per trip (percent)
    pub overnight_billable_percent: i64,

    /// Retention deducted from gross settlement amounts (basis points)
    /// (e.g., 100 = 1%)
    pub retention_rate_bps: i64,

    /// Days counted as week 1 of a fortnight
    pub first_week_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overnight_billable_percent: 50,
            retention_rate_bps: 100,
            first_week_days: DEFAULT_FIRST_WEEK_DAYS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is within its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "overnight_billable_percent",
            self.overnight_billable_percent,
            0,
            100,
        )?;
        check_range("retention_rate_bps", self.retention_rate_bps, 0, BPS_PER_UNIT)?;
        check_range("first_week_days", self.first_week_days, 1, 15)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_out_of_range_overnight_share() {
        let config = EngineConfig {
            overnight_billable_percent: 120,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "overnight_billable_percent",
                value: 120,
                min: 0,
                max: 100,
            })
        );
    }

    #[test]
    fn test_zero_week_length_rejected() {
        let result = EngineConfig::from_json_str(r#"{"first_week_days": 0}"#);
        assert!(matches!(
            result,
            Err(ConfigError::OutOfRange {
                field: "first_week_days",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = EngineConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
