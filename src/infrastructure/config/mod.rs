//! Infrastructure configuration modules.

pub mod logging;
pub mod market_data;
pub mod notifier;
pub mod schedule;
pub mod settings;
pub mod thresholds;
