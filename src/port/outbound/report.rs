//! Per-cycle reporting port for presentation surfaces.
//!
//! The core hands each completed cycle's results to a [`ReportSink`]. The
//! sink decides how to display them; the core never reads anything back.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::{AlertEvent, CycleKind, PricePoint, TrackedSymbol};
use crate::error::DataUnavailable;

/// Latest sample for a symbol that returned data.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestQuote {
    pub symbol: TrackedSymbol,
    pub point: PricePoint,
}

/// A symbol that produced no data this cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct UnavailableSymbol {
    pub symbol: TrackedSymbol,
    pub reason: DataUnavailable,
}

/// Everything a presentation surface gets from one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub kind: CycleKind,
    pub generated_at: DateTime<Utc>,
    /// Latest point per symbol, in configuration order.
    pub latest: Vec<LatestQuote>,
    /// Triggered alerts, in configuration order. Empty for refresh cycles.
    pub alerts: Vec<AlertEvent>,
    pub unavailable: Vec<UnavailableSymbol>,
}

/// Receiver of cycle reports.
///
/// Implementations must return quickly; the scheduler calls this inline.
pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &CycleReport);
}

/// A no-op sink for when nothing displays results.
pub struct NullReportSink;

impl ReportSink for NullReportSink {
    fn publish(&self, _report: &CycleReport) {}
}

/// A sink that logs each report via tracing.
pub struct LogReportSink;

impl ReportSink for LogReportSink {
    fn publish(&self, report: &CycleReport) {
        for quote in &report.latest {
            info!(
                cycle = %report.kind,
                symbol = %quote.symbol,
                close = quote.point.close(),
                at = %quote.point.timestamp(),
                "Latest close"
            );
        }
        for alert in &report.alerts {
            info!(
                symbol = %alert.symbol(),
                kind = %alert.kind(),
                change_pct = alert.change_pct(),
                "{}",
                alert.message().trim_end()
            );
        }
        for missing in &report.unavailable {
            warn!(
                cycle = %report.kind,
                symbol = %missing.symbol,
                reason = %missing.reason,
                "Data unavailable"
            );
        }
    }
}
