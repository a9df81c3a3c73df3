//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`provider`] - Scripted [`MarketDataProvider`](crate::port::MarketDataProvider)
//!   with per-symbol canned histories or errors.
//! - [`transport`] - Recording [`NotificationTransport`](crate::port::NotificationTransport)
//!   that can be told to fail or stall.
//! - [`clock`] - Settable and tokio-paused-time clocks.

pub mod clock;
pub mod provider;
pub mod transport;
