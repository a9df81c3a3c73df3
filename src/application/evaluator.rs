//! Threshold evaluation over sampled price history.
//!
//! Two modes share one percentage-change primitive:
//!
//! - **Drop**: last close versus the previous close. Directional, so a rise
//!   yields a negative drop and never triggers.
//! - **Pattern**: latest close versus the first close of the period. Uses
//!   the absolute change, so both rises and falls trigger.
//!
//! Both are pure functions of one symbol's history.

use chrono::{DateTime, Utc};

use crate::domain::{AlertEvent, AlertKind, PatternPeriod, PriceHistory, TrackedSymbol};

/// Thresholds applied to every tracked symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    /// Minimum consecutive-close drop, in percent.
    pub drop_threshold_pct: f64,
    /// Minimum absolute change over the pattern period, in percent.
    pub pattern_threshold_pct: f64,
    pub pattern_period: PatternPeriod,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            drop_threshold_pct: 10.0,
            pattern_threshold_pct: 5.0,
            pattern_period: PatternPeriod::Daily,
        }
    }
}

/// Percentage change from `from` to `to`. `None` when `from` is zero or
/// either value is not finite.
#[must_use]
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return None;
    }
    Some((to - from) / from * 100.0)
}

/// Check the last two closes for a drop of at least `threshold_pct`.
#[must_use]
pub fn evaluate_drop(
    symbol: &TrackedSymbol,
    history: &PriceHistory,
    threshold_pct: f64,
    at: DateTime<Utc>,
) -> Option<AlertEvent> {
    let (prev, curr) = history.last_two()?;
    let drop_pct = -percent_change(prev.close(), curr.close())?;
    if drop_pct < threshold_pct {
        return None;
    }
    Some(AlertEvent::new(
        symbol.clone(),
        AlertKind::Drop,
        -drop_pct,
        format!("{symbol} dropped {drop_pct:.2}% "),
        at,
    ))
}

/// Check the change across the whole period against `threshold_pct`.
#[must_use]
pub fn evaluate_pattern(
    symbol: &TrackedSymbol,
    history: &PriceHistory,
    period: PatternPeriod,
    threshold_pct: f64,
    at: DateTime<Utc>,
) -> Option<AlertEvent> {
    if history.len() < 2 {
        return None;
    }
    let first = history.first()?;
    let last = history.latest()?;
    if last.timestamp() <= first.timestamp() {
        return None;
    }
    let change_pct = percent_change(first.close(), last.close())?;
    if change_pct.abs() < threshold_pct {
        return None;
    }
    let direction = if change_pct > 0.0 { "rise" } else { "fall" };
    Some(AlertEvent::new(
        symbol.clone(),
        AlertKind::Pattern,
        change_pct,
        format!(
            "{symbol} shows a {:.2}% {direction} over the last {period}",
            change_pct.abs()
        ),
        at,
    ))
}

/// Applies a [`ThresholdConfig`] to sampled histories.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdEvaluator {
    config: ThresholdConfig,
}

impl ThresholdEvaluator {
    #[must_use]
    pub const fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    #[must_use]
    pub fn drop(
        &self,
        symbol: &TrackedSymbol,
        history: &PriceHistory,
        at: DateTime<Utc>,
    ) -> Option<AlertEvent> {
        evaluate_drop(symbol, history, self.config.drop_threshold_pct, at)
    }

    #[must_use]
    pub fn pattern(
        &self,
        symbol: &TrackedSymbol,
        history: &PriceHistory,
        at: DateTime<Utc>,
    ) -> Option<AlertEvent> {
        evaluate_pattern(
            symbol,
            history,
            self.config.pattern_period,
            self.config.pattern_threshold_pct,
            at,
        )
    }
}
