//! Per-cycle price sampling.
//!
//! Fetches history for every tracked symbol from the injected
//! [`MarketDataProvider`]. Each symbol is isolated: a failure becomes a
//! [`DataUnavailable`] marker for that symbol while the rest still sample.
//! Nothing is cached between calls.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::domain::{PriceHistory, SamplingWindow, TrackedSymbol};
use crate::error::DataUnavailable;
use crate::port::MarketDataProvider;

/// Outcome of sampling one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSample {
    pub symbol: TrackedSymbol,
    pub history: Result<PriceHistory, DataUnavailable>,
}

/// Fetches fresh price history for a symbol list.
pub struct Sampler {
    provider: Arc<dyn MarketDataProvider>,
    max_concurrency: usize,
}

impl Sampler {
    /// Create a sampler querying at most `max_concurrency` symbols at once.
    pub fn new(provider: Arc<dyn MarketDataProvider>, max_concurrency: usize) -> Self {
        Self {
            provider,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Sample every symbol, returning results in input order.
    ///
    /// Duplicate symbols are fetched and reported once per occurrence.
    pub async fn fetch(
        &self,
        symbols: &[TrackedSymbol],
        window: SamplingWindow,
    ) -> Vec<SymbolSample> {
        let samples: Vec<SymbolSample> = stream::iter(symbols.iter().cloned())
            .map(|symbol| self.fetch_one(symbol, window))
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let failed = samples.iter().filter(|s| s.history.is_err()).count();
        debug!(
            provider = self.provider.name(),
            lookback = %window.lookback,
            interval = %window.interval,
            symbols = samples.len(),
            failed,
            "Sampling pass complete"
        );

        samples
    }

    async fn fetch_one(&self, symbol: TrackedSymbol, window: SamplingWindow) -> SymbolSample {
        let history = match self.provider.history(&symbol, window).await {
            Ok(points) if points.is_empty() => Err(DataUnavailable::EmptyHistory),
            Ok(points) => Ok(PriceHistory::new(points)),
            Err(e) => Err(e),
        };

        if let Err(reason) = &history {
            warn!(symbol = %symbol, reason = %reason, "Data unavailable");
        }

        SymbolSample { symbol, history }
    }
}
