//! stockwatch - threshold-based stock price monitoring with push alerts.
//!
//! Watches a list of ticker symbols on a fixed cadence, evaluates each one
//! against a drop threshold and a pattern threshold, and sends every alert
//! triggered in a cycle as one consolidated notification.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Value types: symbols, price history, alerts, windows
//! - [`port`] - Collaborator traits: market data, transport, clock, report sink
//! - [`application`] - The monitoring core: sampling, evaluation, gating,
//!   aggregation, dispatch and scheduling
//! - [`adapter`] - Yahoo chart feed, Telegram/Pushbullet/log transports, CLI
//! - [`infrastructure`] - Configuration loading and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram transport via teloxide
//! - `testkit` - Scripted fakes for integration tests
//!
//! # Example
//!
//! ```no_run
//! use stockwatch::infrastructure::config::settings::Config;
//!
//! let config = Config::parse_toml(r#"symbols = ["AAPL", "TSLA"]"#).unwrap();
//! assert_eq!(config.tracked_symbols().unwrap().len(), 2);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
