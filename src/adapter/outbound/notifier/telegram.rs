//! Telegram push transport.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::RequestError;
use tracing::debug;

use crate::error::{ConfigError, DeliveryFailed};
use crate::port::NotificationTransport;

/// Bot credentials and target chat.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if either is unset, or
    /// [`ConfigError::InvalidValue`] if the chat id is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "TELEGRAM_BOT_TOKEN",
            })?;
        let raw_chat = std::env::var("TELEGRAM_CHAT_ID").map_err(|_| ConfigError::MissingField {
            field: "TELEGRAM_CHAT_ID",
        })?;
        let chat_id = raw_chat
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: "TELEGRAM_CHAT_ID",
                reason: format!("expected an integer chat id, got {raw_chat:?}"),
            })?;

        Ok(Self { bot_token, chat_id })
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Sends each notification as a plain-text chat message.
pub struct TelegramTransport {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramTransport {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

/// Title on the first line, body below.
fn compose(title: &str, body: &str) -> String {
    if title.is_empty() {
        body.to_string()
    } else {
        format!("{title}\n{body}")
    }
}

fn delivery_error(err: RequestError) -> DeliveryFailed {
    match err {
        RequestError::Api(api) => DeliveryFailed::Transport(format!("telegram api: {api}")),
        other => DeliveryFailed::Transport(other.to_string()),
    }
}

#[async_trait]
impl NotificationTransport for TelegramTransport {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn deliver(&self, title: &str, body: &str) -> Result<(), DeliveryFailed> {
        self.bot
            .send_message(self.chat_id, compose(title, body))
            .await
            .map_err(delivery_error)?;
        debug!(chat_id = self.chat_id.0, "Telegram message sent");
        Ok(())
    }
}
