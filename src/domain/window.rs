//! Weekday time-of-day windows in a fixed reference timezone.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike, Utc, Weekday};

/// A `[start, end]` time-of-day range on one weekday. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    weekday: Weekday,
    start: NaiveTime,
    end: NaiveTime,
}

/// Reason a window could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOrderError;

impl fmt::Display for WindowOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("window start must not be after its end")
    }
}

impl std::error::Error for WindowOrderError {}

impl ActiveWindow {
    /// Create a window; `start` must not be after `end`.
    pub fn new(
        weekday: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, WindowOrderError> {
        if start > end {
            return Err(WindowOrderError);
        }
        Ok(Self {
            weekday,
            start,
            end,
        })
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// True when `weekday` matches and `time` lies within the window.
    ///
    /// Compared at minute precision, so an end of `22:00` covers the whole
    /// 22:00 minute and a start of `14:00` excludes 13:59:59.
    #[must_use]
    pub fn contains(&self, weekday: Weekday, time: NaiveTime) -> bool {
        let minute = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);
        self.weekday == weekday && self.start <= minute && minute <= self.end
    }
}

impl fmt::Display for ActiveWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.weekday,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// A set of windows evaluated in one reference timezone.
///
/// An empty schedule is always open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSchedule {
    windows: Vec<ActiveWindow>,
    offset: FixedOffset,
}

impl WindowSchedule {
    #[must_use]
    pub fn new(windows: Vec<ActiveWindow>, offset: FixedOffset) -> Self {
        Self { windows, offset }
    }

    /// Schedule with no windows, i.e. always open.
    #[must_use]
    pub fn always(offset: FixedOffset) -> Self {
        Self::new(Vec::new(), offset)
    }

    pub fn windows(&self) -> &[ActiveWindow] {
        &self.windows
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether `now` falls inside at least one window.
    #[must_use]
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        if self.windows.is_empty() {
            return true;
        }
        let local = now.with_timezone(&self.offset);
        let weekday = local.weekday();
        let time = local.time();
        self.windows.iter().any(|w| w.contains(weekday, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        assert_eq!(
            ActiveWindow::new(Weekday::Mon, hm(22, 0), hm(14, 0)),
            Err(WindowOrderError)
        );
    }

    #[test]
    fn test_window_contains_inclusive_bounds() {
        let window = ActiveWindow::new(Weekday::Mon, hm(14, 0), hm(22, 0)).unwrap();
        assert!(window.contains(Weekday::Mon, hm(14, 0)));
        assert!(window.contains(Weekday::Mon, hm(22, 0)));
        assert!(!window.contains(Weekday::Mon, hm(22, 1)));
        assert!(!window.contains(Weekday::Tue, hm(15, 0)));
    }

    #[test]
    fn test_window_bounds_cover_whole_minute() {
        let window = ActiveWindow::new(Weekday::Mon, hm(14, 0), hm(22, 0)).unwrap();
        let at = |h, m, sec| NaiveTime::from_hms_opt(h, m, sec).unwrap();
        assert!(window.contains(Weekday::Mon, at(22, 0, 30)));
        assert!(window.contains(Weekday::Mon, at(22, 0, 59)));
        assert!(!window.contains(Weekday::Mon, at(22, 1, 0)));
        assert!(!window.contains(Weekday::Mon, at(13, 59, 59)));
    }

    #[test]
    fn test_window_display() {
        let window = ActiveWindow::new(Weekday::Fri, hm(9, 30), hm(16, 0)).unwrap();
        assert_eq!(window.to_string(), "Fri 09:30-16:00");
    }
}
