//! Cycle identity shared by the scheduler and report consumers.

use std::fmt;

/// The two independent cadences driven by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleKind {
    /// Sample, evaluate, aggregate and dispatch.
    Alert,
    /// Sample the intraday view for display only.
    Refresh,
}

impl CycleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for CycleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
