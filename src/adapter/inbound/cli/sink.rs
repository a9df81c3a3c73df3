//! Terminal report sink for the `run` command.

use crate::adapter::inbound::cli::output;
use crate::port::{CycleReport, ReportSink};

/// Prints each cycle report through [`output`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CliReportSink;

impl ReportSink for CliReportSink {
    fn publish(&self, report: &CycleReport) {
        print_report(report);
    }
}

/// Render one report: latest closes, alerts, then unavailable symbols.
pub fn print_report(report: &CycleReport) {
    let timestamp = report.generated_at.format("%H:%M:%S").to_string();

    for quote in &report.latest {
        output::quote(&timestamp, quote.symbol.as_str(), quote.point.close());
    }
    for alert in &report.alerts {
        output::alert(
            &timestamp,
            alert.symbol().as_str(),
            alert.change_pct(),
            alert.message(),
        );
    }
    for missing in &report.unavailable {
        output::unavailable(&timestamp, missing.symbol.as_str(), &missing.reason.to_string());
    }
}
