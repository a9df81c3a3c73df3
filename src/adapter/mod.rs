//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface
//! - [`outbound`] - Driven side: market data feed and notification transports

pub mod inbound;
pub mod outbound;
