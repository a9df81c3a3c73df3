//! Transport that writes notifications to the log.

use async_trait::async_trait;
use tracing::info;

use crate::error::DeliveryFailed;
use crate::port::NotificationTransport;

/// Logs each notification instead of pushing it anywhere. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

#[async_trait]
impl NotificationTransport for LogTransport {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, title: &str, body: &str) -> Result<(), DeliveryFailed> {
        for line in body.lines() {
            info!(title, "{}", line.trim_end());
        }
        Ok(())
    }
}
