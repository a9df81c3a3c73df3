use std::time::Duration;

use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// Raised once at startup; invalid values are never coerced.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Why a symbol produced no usable history this cycle.
///
/// Isolated to the symbol it belongs to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataUnavailable {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("no price history returned")]
    EmptyHistory,

    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Why a notification batch was not delivered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryFailed {
    #[error("transport timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport rejected message with status {status}")]
    Rejected { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),
}

/// A cycle ran past its next scheduled tick.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{cycle} cycle overran its interval, dropped {missed} tick(s)")]
pub struct SchedulerOverrun {
    pub cycle: &'static str,
    pub missed: u32,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DataUnavailable(#[from] DataUnavailable),

    #[error(transparent)]
    Delivery(#[from] DeliveryFailed),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for DataUnavailable {
    fn from(err: reqwest::Error) -> Self {
        DataUnavailable::Fetch(err.to_string())
    }
}

impl From<reqwest::Error> for DeliveryFailed {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DeliveryFailed::Rejected {
                status: status.as_u16(),
            },
            None => DeliveryFailed::Transport(err.to_string()),
        }
    }
}
