//! Yahoo chart API response types.
//!
//! Example payload:
//! ```json
//! {"chart":{"result":[{"timestamp":[1704205800],
//!   "indicators":{"quote":[{"close":[185.64]}]}}],"error":null}}
//! ```
//!
//! Unknown symbols come back with `result: null` and a populated `error`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::PricePoint;
use crate::error::DataUnavailable;

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
pub struct Quote {
    /// Closes aligned with `timestamp`. Yahoo emits `null` for gaps.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Convert into price points for `symbol`.
    ///
    /// Null closes are skipped. An empty series is returned as-is; the
    /// sampler decides what an empty history means.
    pub fn into_points(self, symbol: &str) -> Result<Vec<PricePoint>, DataUnavailable> {
        if let Some(error) = self.chart.error {
            let detail = error.description.unwrap_or(error.code);
            return Err(DataUnavailable::UnknownSymbol(format!("{symbol}: {detail}")));
        }

        let Some(result) = self.chart.result.and_then(|r| r.into_iter().next()) else {
            return Err(DataUnavailable::UnknownSymbol(symbol.to_string()));
        };

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let points = timestamps
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close.filter(|c| c.is_finite())?;
                let at: DateTime<Utc> = DateTime::from_timestamp(ts, 0)?;
                Some(PricePoint::new(at, close))
            })
            .collect();

        Ok(points)
    }
}
