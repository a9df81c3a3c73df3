//! Yahoo chart HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use super::dto::ChartEnvelope;
use crate::domain::{PricePoint, SamplingWindow, TrackedSymbol};
use crate::error::{DataUnavailable, Result};
use crate::port::MarketDataProvider;

/// Public chart endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; stockwatch)";

/// Market data provider backed by the Yahoo Finance chart API.
///
/// One HTTP client is built up front and shared by every request.
pub struct YahooChartProvider {
    http: HttpClient,
    base_url: Url,
}

impl YahooChartProvider {
    /// Create a provider for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Build the chart URL for `symbol` over `window`.
    pub fn chart_url(&self, symbol: &TrackedSymbol, window: SamplingWindow) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("v8/finance/chart/{}", symbol.as_str()))?;
        url.query_pairs_mut()
            .append_pair("range", window.lookback.as_str())
            .append_pair("interval", window.interval.as_str());
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooChartProvider {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn history(
        &self,
        symbol: &TrackedSymbol,
        window: SamplingWindow,
    ) -> std::result::Result<Vec<PricePoint>, DataUnavailable> {
        let url = self
            .chart_url(symbol, window)
            .map_err(|e| DataUnavailable::Fetch(e.to_string()))?;
        debug!(symbol = %symbol, url = %url, "Fetching chart");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Unknown symbols arrive as 404 with a chart error body.
        match serde_json::from_str::<ChartEnvelope>(&body) {
            Ok(envelope) => envelope.into_points(symbol.as_str()),
            Err(e) if status.is_success() => {
                warn!(symbol = %symbol, error = %e, "Malformed chart response");
                Err(DataUnavailable::Fetch(format!("decode: {e}")))
            }
            Err(_) => Err(DataUnavailable::Fetch(format!("HTTP {status}"))),
        }
    }
}
