//! Handler for the `sample` command.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::adapter::inbound::cli::{output, sink};
use crate::adapter::outbound::notifier::LogTransport;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::NullReportSink;

/// Evaluate every symbol once and print the report. Nothing is dispatched.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let provider = bootstrap::build_provider(&config)?;
    let runner = bootstrap::build_runner(
        &config,
        provider,
        Arc::new(LogTransport),
        Arc::new(NullReportSink),
    )?;

    output::section("Sample");
    let report = runner.evaluate(Utc::now()).await;
    sink::print_report(&report);

    if report.alerts.is_empty() {
        output::success("No thresholds crossed");
    } else {
        output::warning(&format!("{} alert(s) would be sent", report.alerts.len()));
    }
    Ok(())
}
