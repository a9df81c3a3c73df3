//! Recording notification transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::DeliveryFailed;
use crate::port::NotificationTransport;

/// Thread-safe message collector for delivery assertions in tests.
///
/// Clones share the same recording.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    messages: Arc<Mutex<Vec<(String, String)>>>,
    failure: Option<DeliveryFailed>,
    stall: Duration,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every delivery with `error`.
    pub fn failing(error: DeliveryFailed) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Sleep `stall` before recording each delivery.
    pub fn stalling(stall: Duration) -> Self {
        Self {
            stall,
            ..Self::default()
        }
    }

    /// Delivered `(title, body)` pairs, oldest first.
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn deliver(&self, title: &str, body: &str) -> Result<(), DeliveryFailed> {
        if !self.stall.is_zero() {
            tokio::time::sleep(self.stall).await;
        }
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.messages
            .lock()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}
