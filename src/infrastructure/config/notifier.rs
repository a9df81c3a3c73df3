//! Notification transport configuration.
//!
//! The file only selects the transport. Credentials are read from the
//! environment when the configuration is loaded.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::notifier::PushbulletConfig;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::TelegramConfig;
use crate::error::ConfigError;

/// Which push backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Write notifications to the log only.
    #[default]
    Log,
    Telegram,
    Pushbullet,
}

impl NotifierKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Telegram => "telegram",
            Self::Pushbullet => "pushbullet",
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[notifier]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub kind: NotifierKind,
    /// Delivery timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Title attached to every notification.
    #[serde(default = "default_title")]
    pub title: String,
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_title() -> String {
    "Stock Alert".into()
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            kind: NotifierKind::default(),
            timeout_secs: default_timeout_secs(),
            title: default_title(),
        }
    }
}

impl NotifierConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve credentials for the selected transport from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the selected transport's
    /// credentials are absent.
    pub fn resolve_credentials(&self) -> Result<Credentials, ConfigError> {
        match self.kind {
            NotifierKind::Log => Ok(Credentials::None),
            NotifierKind::Pushbullet => PushbulletConfig::from_env().map(Credentials::Pushbullet),
            #[cfg(feature = "telegram")]
            NotifierKind::Telegram => TelegramConfig::from_env().map(Credentials::Telegram),
            #[cfg(not(feature = "telegram"))]
            NotifierKind::Telegram => Err(ConfigError::InvalidValue {
                field: "notifier.kind",
                reason: "telegram transport requires the telegram feature".into(),
            }),
        }
    }
}

/// Resolved transport credentials.
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    #[default]
    None,
    #[cfg(feature = "telegram")]
    Telegram(TelegramConfig),
    Pushbullet(PushbulletConfig),
}
