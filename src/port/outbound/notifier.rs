//! Notification transport port.
//!
//! This module defines the trait for pushing a consolidated alert message
//! to an external channel (Telegram, Pushbullet, logs).

use async_trait::async_trait;

use crate::error::DeliveryFailed;

/// Push channel for consolidated alert messages.
///
/// Credentials are handed to the implementation at construction time and
/// never passed through this trait.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Success means the remote acknowledged with a 2xx-equivalent response
/// - Callers bound each call with a timeout; implementations need not
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Return the transport name for logging.
    fn name(&self) -> &'static str;

    /// Deliver one message.
    async fn deliver(&self, title: &str, body: &str) -> Result<(), DeliveryFailed>;
}
