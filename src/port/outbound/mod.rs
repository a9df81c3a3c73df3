//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators the core depends on: the
//! market data feed, the notification transport, the wall clock, and the
//! presentation surface that receives cycle reports.

pub mod clock;
pub mod market_data;
pub mod notifier;
pub mod report;
