//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. It is
//! loaded from a TOML file once at startup and rejected outright if any
//! value is invalid. Transport credentials come only from the environment.
//!
//! # Example
//!
//! ```no_run
//! use stockwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::market_data::MarketDataConfig;
use super::notifier::{Credentials, NotifierConfig};
use super::schedule::ScheduleConfig;
use super::thresholds::ThresholdsConfig;
use crate::domain::TrackedSymbol;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Ticker symbols to watch, in report order.
    pub symbols: Vec<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub market_data: MarketDataConfig,

    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Credentials for the selected transport, read from the environment.
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., empty symbol list, reversed window)
    /// - The selected transport's credentials are not in the environment
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;

        // Never from the config file.
        config.credentials = config.notifier.resolve_credentials()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.tracked_symbols()?;
        self.thresholds.validate()?;
        self.schedule.validate()?;

        if self.market_data.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "market_data.base_url",
            });
        }
        if self.market_data.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market_data.timeout_secs",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.notifier.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notifier.timeout_secs",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Normalized symbols, in configured order with duplicates kept.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty or any entry is blank.
    pub fn tracked_symbols(&self) -> std::result::Result<Vec<TrackedSymbol>, ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::MissingField { field: "symbols" });
        }
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                TrackedSymbol::parse(raw).ok_or_else(|| ConfigError::InvalidValue {
                    field: "symbols",
                    reason: format!("entry {i} is blank"),
                })
            })
            .collect()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::notifier::env_lock::ENV_LOCK;
    use crate::domain::PatternPeriod;
    use crate::error::Error;
    use crate::infrastructure::config::logging::LogFormat;
    use crate::infrastructure::config::notifier::NotifierKind;

    fn config_err(toml: &str) -> ConfigError {
        match Config::parse_toml(toml) {
            Err(Error::Config(e)) => e,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_symbols_keep_order_and_duplicates() {
        let config = Config::parse_toml(r#"symbols = ["tsla", " AAPL", "tsla"]"#).unwrap();

        let symbols: Vec<_> = config
            .tracked_symbols()
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(symbols, vec!["TSLA", "AAPL", "TSLA"]);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::parse_toml(r#"symbols = ["aapl", " tsla "]"#).unwrap();

        let symbols: Vec<_> = config
            .tracked_symbols()
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(symbols, vec!["AAPL", "TSLA"]);
        assert_eq!(config.thresholds.drop_pct, 10.0);
        assert_eq!(config.thresholds.pattern_pct, 5.0);
        assert_eq!(config.thresholds.pattern_period, PatternPeriod::Daily);
        assert_eq!(config.schedule.poll_interval_secs, 1800);
        assert_eq!(config.schedule.refresh_interval_secs, 60);
        assert_eq!(config.notifier.kind, NotifierKind::Log);
        assert_eq!(config.notifier.title, "Stock Alert");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(matches!(config.credentials, Credentials::None));
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            symbols = ["AAPL", "AAPL", "MSFT"]

            [logging]
            level = "debug"
            format = "json"

            [thresholds]
            drop_pct = 3.5
            pattern_pct = 12
            pattern_period = "monthly"

            [schedule]
            poll_interval_secs = 600
            refresh_interval_secs = 30
            utc_offset = "-05:00"

            [[schedule.active_windows]]
            weekday = "mon"
            start = "09:30"
            end = "16:00"

            [[schedule.activation]]
            weekday = "fri"
            start = "08:00"
            end = "18:00"
        "#;
        let config = Config::parse_toml(toml).unwrap();

        assert_eq!(config.tracked_symbols().unwrap().len(), 3);
        assert_eq!(config.thresholds.pattern_pct, 12.0);
        assert_eq!(config.thresholds.pattern_period, PatternPeriod::Monthly);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.schedule.active_schedule().unwrap().windows().len(), 1);
        assert!(config.schedule.activation_schedule().unwrap().is_some());
        assert_eq!(
            config.schedule.offset().unwrap().local_minus_utc(),
            -5 * 3600
        );
    }

    #[test]
    fn test_missing_symbols_rejected() {
        assert!(matches!(
            Config::parse_toml("[thresholds]\ndrop_pct = 5"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
        assert!(matches!(
            config_err("symbols = []"),
            ConfigError::MissingField { field: "symbols" }
        ));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        assert!(matches!(
            config_err(r#"symbols = ["AAPL", "  "]"#),
            ConfigError::InvalidValue { field: "symbols", .. }
        ));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = config_err("symbols = [\"AAPL\"]\n[thresholds]\ndrop_pct = 150.0");
        assert!(matches!(err, ConfigError::InvalidValue { field: "drop_pct", .. }));
    }

    #[test]
    fn test_unknown_pattern_period_rejected() {
        assert!(matches!(
            config_err("symbols = [\"AAPL\"]\n[thresholds]\npattern_period = \"yearly\""),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_pushbullet_requires_env_key() {
        let _guard = ENV_LOCK.lock();
        std::env::remove_var("PUSHBULLET_API_KEY");

        let toml = "symbols = [\"AAPL\"]\n[notifier]\nkind = \"pushbullet\"";
        assert!(matches!(
            config_err(toml),
            ConfigError::MissingField { field: "PUSHBULLET_API_KEY" }
        ));

        std::env::set_var("PUSHBULLET_API_KEY", "o.key");
        let config = Config::parse_toml(toml).unwrap();
        assert!(matches!(config.credentials, Credentials::Pushbullet(_)));
        std::env::remove_var("PUSHBULLET_API_KEY");
    }
}
