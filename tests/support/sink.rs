use std::sync::Arc;

use parking_lot::Mutex;
use stockwatch::domain::CycleKind;
use stockwatch::port::{CycleReport, ReportSink};

/// Thread-safe report collector for presentation assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<CycleReport>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<CycleReport> {
        self.reports.lock().clone()
    }

    pub fn count(&self, kind: CycleKind) -> usize {
        self.reports.lock().iter().filter(|r| r.kind == kind).count()
    }
}

impl ReportSink for RecordingSink {
    fn publish(&self, report: &CycleReport) {
        self.reports.lock().push(report.clone());
    }
}
