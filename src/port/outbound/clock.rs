//! Wall-clock port.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Timezone handling lives in [`WindowSchedule`](crate::domain::WindowSchedule);
/// clocks always report UTC.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the host system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
