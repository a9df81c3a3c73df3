//! Alert events and the consolidated notification batch.

use std::fmt;

use chrono::{DateTime, Utc};

use super::symbol::TrackedSymbol;

/// Which evaluation mode produced an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Consecutive-close drop at or above the drop threshold.
    Drop,
    /// Change over the pattern period at or above the pattern threshold.
    Pattern,
}

impl AlertKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triggered alert for one symbol within one cycle.
///
/// Immutable once created; fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    symbol: TrackedSymbol,
    kind: AlertKind,
    change_pct: f64,
    message: String,
    generated_at: DateTime<Utc>,
}

impl AlertEvent {
    #[must_use]
    pub fn new(
        symbol: TrackedSymbol,
        kind: AlertKind,
        change_pct: f64,
        message: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol,
            kind,
            change_pct,
            message: message.into(),
            generated_at,
        }
    }

    pub fn symbol(&self) -> &TrackedSymbol {
        &self.symbol
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Signed percentage change that triggered the alert.
    pub fn change_pct(&self) -> f64 {
        self.change_pct
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// All alerts from a single cycle, merged into one notification.
///
/// Never empty: the only constructor refuses an empty event list.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationBatch {
    events: Vec<AlertEvent>,
    message: String,
}

impl NotificationBatch {
    /// Build a batch preserving event order, or `None` for no events.
    #[must_use]
    pub fn from_events(events: Vec<AlertEvent>) -> Option<Self> {
        if events.is_empty() {
            return None;
        }
        let message = events
            .iter()
            .map(AlertEvent::message)
            .collect::<Vec<_>>()
            .join("\n");
        Some(Self { events, message })
    }

    pub fn events(&self) -> &[AlertEvent] {
        &self.events
    }

    /// Newline-joined messages of every event, in order.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
