//! Pushbullet push transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, DeliveryFailed, Result};
use crate::port::NotificationTransport;

/// Pushbullet pushes endpoint.
const API_URL: &str = "https://api.pushbullet.com/v2/pushes";

/// Credentials for the Pushbullet API.
#[derive(Clone)]
pub struct PushbulletConfig {
    pub api_key: String,
}

impl PushbulletConfig {
    /// Read `PUSHBULLET_API_KEY` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if the variable is unset or blank.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        let api_key = std::env::var("PUSHBULLET_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "PUSHBULLET_API_KEY",
            })?;
        Ok(Self { api_key })
    }
}

impl std::fmt::Debug for PushbulletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushbulletConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct NotePush<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'a str,
    body: &'a str,
}

impl<'a> NotePush<'a> {
    fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            kind: "note",
            title,
            body,
        }
    }
}

/// Sends each notification as a Pushbullet note.
pub struct PushbulletTransport {
    http: HttpClient,
    api_key: String,
}

impl PushbulletTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: PushbulletConfig, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl NotificationTransport for PushbulletTransport {
    fn name(&self) -> &'static str {
        "pushbullet"
    }

    async fn deliver(&self, title: &str, body: &str) -> std::result::Result<(), DeliveryFailed> {
        let response = self
            .http
            .post(API_URL)
            .header("Access-Token", &self.api_key)
            .json(&NotePush::new(title, body))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryFailed::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "Pushbullet note accepted");
        Ok(())
    }
}
