//! Best-effort delivery of notification batches.
//!
//! Each batch gets exactly one delivery attempt bounded by a timeout.
//! Failures are returned to the caller and never queued for retry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::domain::NotificationBatch;
use crate::error::DeliveryFailed;
use crate::port::NotificationTransport;

/// Receipt for a batch the transport acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivered {
    pub events: usize,
    pub elapsed: Duration,
}

/// Sends batches through a [`NotificationTransport`].
pub struct NotificationDispatcher {
    transport: Arc<dyn NotificationTransport>,
    title: String,
    timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(
        transport: Arc<dyn NotificationTransport>,
        title: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            title: title.into(),
            timeout,
        }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Deliver `batch` once. A timeout counts as a failed delivery.
    pub async fn send(&self, batch: &NotificationBatch) -> Result<Delivered, DeliveryFailed> {
        let started = Instant::now();
        debug!(
            transport = self.transport.name(),
            events = batch.len(),
            "Dispatching notification batch"
        );

        let outcome = tokio::time::timeout(
            self.timeout,
            self.transport.deliver(&self.title, batch.message()),
        )
        .await
        .unwrap_or(Err(DeliveryFailed::Timeout(self.timeout)));

        match outcome {
            Ok(()) => {
                let delivered = Delivered {
                    events: batch.len(),
                    elapsed: started.elapsed(),
                };
                info!(
                    transport = self.transport.name(),
                    events = delivered.events,
                    elapsed_ms = delivered.elapsed.as_millis() as u64,
                    "Notification delivered"
                );
                Ok(delivered)
            }
            Err(e) => {
                error!(
                    transport = self.transport.name(),
                    events = batch.len(),
                    error = %e,
                    "Notification delivery failed"
                );
                Err(e)
            }
        }
    }
}
