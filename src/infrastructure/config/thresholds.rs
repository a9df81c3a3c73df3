//! Alert threshold configuration.

use serde::Deserialize;

use crate::application::evaluator::ThresholdConfig;
use crate::domain::PatternPeriod;
use crate::error::ConfigError;

/// `[thresholds]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    /// Consecutive-close drop that triggers an alert, in percent.
    #[serde(default = "default_drop_pct")]
    pub drop_pct: f64,
    /// Absolute change over `pattern_period` that triggers an alert, in percent.
    #[serde(default = "default_pattern_pct")]
    pub pattern_pct: f64,
    #[serde(default)]
    pub pattern_period: PatternPeriod,
}

const fn default_drop_pct() -> f64 {
    10.0
}

const fn default_pattern_pct() -> f64 {
    5.0
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            drop_pct: default_drop_pct(),
            pattern_pct: default_pattern_pct(),
            pattern_period: PatternPeriod::default(),
        }
    }
}

impl ThresholdsConfig {
    /// Both thresholds must lie in (0, 100].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pct("drop_pct", self.drop_pct)?;
        check_pct("pattern_pct", self.pattern_pct)
    }

    #[must_use]
    pub fn to_threshold_config(&self) -> ThresholdConfig {
        ThresholdConfig {
            drop_threshold_pct: self.drop_pct,
            pattern_threshold_pct: self.pattern_pct,
            pattern_period: self.pattern_period,
        }
    }
}

fn check_pct(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 100.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be in (0, 100], got {value}"),
        })
    }
}
