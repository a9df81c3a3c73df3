//! Per-cycle alert consolidation.

use crate::domain::{AlertEvent, NotificationBatch};

/// Merges one cycle's alerts into a single batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertAggregator;

impl AlertAggregator {
    /// Consolidate `events` in order, or `None` when nothing triggered.
    #[must_use]
    pub fn collect(&self, events: Vec<AlertEvent>) -> Option<NotificationBatch> {
        NotificationBatch::from_events(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlertKind, TrackedSymbol};
    use chrono::Utc;

    fn event(symbol: &str, message: &str) -> AlertEvent {
        AlertEvent::new(
            TrackedSymbol::parse(symbol).unwrap(),
            AlertKind::Drop,
            -12.0,
            message,
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_yields_no_batch() {
        assert!(AlertAggregator.collect(Vec::new()).is_none());
    }

    #[test]
    fn test_batch_joins_messages_in_order() {
        let a = event("AAPL", "AAPL dropped 12.00% ");
        let b = event("TSLA", "TSLA dropped 15.00% ");

        let batch = AlertAggregator.collect(vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(batch.message(), format!("{}\n{}", a.message(), b.message()));
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.events()[0].symbol().as_str(), "AAPL");
        assert_eq!(batch.events()[1].symbol().as_str(), "TSLA");
    }

    #[test]
    fn test_single_event_batch() {
        let batch = AlertAggregator
            .collect(vec![event("MSFT", "only")])
            .unwrap();
        assert_eq!(batch.message(), "only");
        assert!(!batch.is_empty());
    }
}
