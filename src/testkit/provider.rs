//! Scripted market data provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeDelta, TimeZone, Utc};

use crate::domain::{PricePoint, SamplingWindow, TrackedSymbol};
use crate::error::DataUnavailable;
use crate::port::MarketDataProvider;

/// Returns canned histories keyed by symbol.
///
/// Symbols without a script are reported as unknown. The same history is
/// served for every sampling window.
#[derive(Default)]
pub struct ScriptedProvider {
    scripts: HashMap<String, Result<Vec<PricePoint>, DataUnavailable>>,
    delay: Duration,
    calls: Arc<AtomicU32>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `closes` one minute apart for `symbol`.
    pub fn with_closes(mut self, symbol: &str, closes: &[f64]) -> Self {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint::new(base + TimeDelta::minutes(i as i64), *close))
            .collect();
        self.scripts.insert(symbol.to_uppercase(), Ok(points));
        self
    }

    pub fn with_error(mut self, symbol: &str, error: DataUnavailable) -> Self {
        self.scripts.insert(symbol.to_uppercase(), Err(error));
        self
    }

    /// Sleep this long before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shared counter of `history` calls.
    pub fn call_count(&self) -> Arc<AtomicU32> {
        self.calls.clone()
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn history(
        &self,
        symbol: &TrackedSymbol,
        _window: SamplingWindow,
    ) -> Result<Vec<PricePoint>, DataUnavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.scripts
            .get(symbol.as_str())
            .cloned()
            .unwrap_or_else(|| Err(DataUnavailable::UnknownSymbol(symbol.to_string())))
    }
}
