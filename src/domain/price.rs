//! Price samples and sampling parameters.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single close value at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    timestamp: DateTime<Utc>,
    close: f64,
}

impl PricePoint {
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub const fn close(&self) -> f64 {
        self.close
    }
}

/// Price points for one symbol, ascending by timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Build a history, sorting points into ascending timestamp order.
    #[must_use]
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(PricePoint::timestamp);
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The two most recent points as `(previous, current)`.
    #[must_use]
    pub fn last_two(&self) -> Option<(&PricePoint, &PricePoint)> {
        match self.points.as_slice() {
            [.., prev, curr] => Some((prev, curr)),
            _ => None,
        }
    }
}

/// How far back a history request reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookback {
    OneDay,
    FiveDays,
    OneMonth,
}

impl Lookback {
    /// Range parameter understood by the chart API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar width of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    OneHour,
    OneDay,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookback and bar width for one sampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingWindow {
    pub lookback: Lookback,
    pub interval: Interval,
}

impl SamplingWindow {
    /// Daily closes, enough to compare the last two sessions.
    pub const DAILY_CLOSES: Self = Self {
        lookback: Lookback::FiveDays,
        interval: Interval::OneDay,
    };

    /// Intraday minute bars for the display refresh.
    pub const INTRADAY: Self = Self {
        lookback: Lookback::OneDay,
        interval: Interval::OneMinute,
    };
}

/// Period over which pattern changes are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl PatternPeriod {
    /// Sampling parameters covering this period.
    #[must_use]
    pub const fn sampling(self) -> SamplingWindow {
        match self {
            Self::Daily => SamplingWindow {
                lookback: Lookback::OneDay,
                interval: Interval::FiveMinutes,
            },
            Self::Weekly => SamplingWindow {
                lookback: Lookback::FiveDays,
                interval: Interval::OneHour,
            },
            Self::Monthly => SamplingWindow {
                lookback: Lookback::OneMonth,
                interval: Interval::OneDay,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }
}

impl fmt::Display for PatternPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_history_sorts_ascending() {
        let history = PriceHistory::new(vec![
            PricePoint::new(at(300), 3.0),
            PricePoint::new(at(100), 1.0),
            PricePoint::new(at(200), 2.0),
        ]);

        let closes: Vec<f64> = history.points().iter().map(PricePoint::close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
        assert_eq!(history.first().unwrap().close(), 1.0);
        assert_eq!(history.latest().unwrap().close(), 3.0);
    }

    #[test]
    fn test_last_two_requires_two_points() {
        let single = PriceHistory::new(vec![PricePoint::new(at(1), 10.0)]);
        assert!(single.last_two().is_none());

        let pair = PriceHistory::new(vec![
            PricePoint::new(at(1), 10.0),
            PricePoint::new(at(2), 9.0),
        ]);
        let (prev, curr) = pair.last_two().unwrap();
        assert_eq!(prev.close(), 10.0);
        assert_eq!(curr.close(), 9.0);
    }

    #[test]
    fn test_pattern_period_sampling() {
        assert_eq!(PatternPeriod::Daily.sampling().lookback.as_str(), "1d");
        assert_eq!(PatternPeriod::Weekly.sampling().interval.as_str(), "1h");
        assert_eq!(PatternPeriod::Monthly.sampling().lookback.as_str(), "1mo");
    }

    #[test]
    fn test_pattern_period_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            period: PatternPeriod,
        }

        let parsed: Wrapper = toml::from_str("period = \"weekly\"").unwrap();
        assert_eq!(parsed.period, PatternPeriod::Weekly);
    }
}
