//! Market data feed configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::yahoo::client::DEFAULT_BASE_URL;

/// `[market_data]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDataConfig {
    /// Chart API host.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MarketDataConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
