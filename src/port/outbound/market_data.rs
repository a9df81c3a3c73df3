//! Market data port for price history lookups.
//!
//! This module defines the single capability the core needs from a data
//! feed: fetch the close history of one symbol. A provider is constructed
//! once and shared across every cycle.

use async_trait::async_trait;

use crate::domain::{PricePoint, SamplingWindow, TrackedSymbol};
use crate::error::DataUnavailable;

/// Source of historical close values.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) since the sampler
/// queries several symbols concurrently.
///
/// # Errors
///
/// Unknown symbols, empty responses and transient transport failures are
/// all reported as [`DataUnavailable`] for that symbol alone.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch close history for `symbol` over `window`.
    ///
    /// Points may come back in any order; the sampler sorts them.
    async fn history(
        &self,
        symbol: &TrackedSymbol,
        window: SamplingWindow,
    ) -> Result<Vec<PricePoint>, DataUnavailable>;
}
