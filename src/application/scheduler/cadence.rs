//! Fixed-interval tick bookkeeping with drift-free advancement.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// One periodic cadence.
///
/// The next tick is always `previous scheduled tick + interval`, never
/// `completion time + interval`. Ticks that fall inside an overrunning
/// cycle are dropped rather than queued.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: TimeDelta,
    next_due: Option<DateTime<Utc>>,
}

impl Cadence {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        let millis = i64::try_from(interval.as_millis()).unwrap_or(i64::MAX / 2);
        Self {
            interval: TimeDelta::milliseconds(millis.max(1)),
            next_due: None,
        }
    }

    /// Schedule the first tick one interval after `at`.
    pub fn anchor(&mut self, at: DateTime<Utc>) {
        self.next_due = Some(at + self.interval);
    }

    /// Forget the pending tick.
    pub fn clear(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.next_due
    }

    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Move past the current tick after its cycle finished at `finished_at`.
    ///
    /// Returns how many ticks were skipped because they were already in
    /// the past.
    pub fn advance(&mut self, finished_at: DateTime<Utc>) -> u32 {
        let Some(scheduled) = self.next_due else {
            return 0;
        };

        let mut next = scheduled + self.interval;
        let mut missed = 0;
        if next <= finished_at {
            let behind = (finished_at - next).num_milliseconds();
            let skips = behind / self.interval.num_milliseconds() + 1;
            let skips = i32::try_from(skips).unwrap_or(i32::MAX);
            next += self.interval * skips;
            missed = u32::try_from(skips).unwrap_or(u32::MAX);
        }

        self.next_due = Some(next);
        missed
    }
}
