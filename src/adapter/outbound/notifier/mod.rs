//! Notification transports.
//!
//! Implements [`NotificationTransport`](crate::port::NotificationTransport)
//! for each supported push backend.

pub mod log;
pub mod pushbullet;
#[cfg(feature = "telegram")]
pub mod telegram;

pub use log::LogTransport;
pub use pushbullet::{PushbulletConfig, PushbulletTransport};
#[cfg(feature = "telegram")]
pub use telegram::{TelegramConfig, TelegramTransport};

#[cfg(test)]
pub(crate) mod env_lock;
