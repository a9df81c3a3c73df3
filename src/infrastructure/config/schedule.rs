//! Timing and window configuration.
//!
//! ```toml
//! [schedule]
//! poll_interval_secs = 1800
//! utc_offset = "-05:00"
//!
//! [[schedule.active_windows]]
//! weekday = "mon"
//! start = "09:30"
//! end = "16:00"
//! ```

use std::time::Duration;

use chrono::{FixedOffset, NaiveTime, Weekday};
use serde::Deserialize;

use crate::application::scheduler::SchedulerConfig;
use crate::domain::{ActiveWindow, WindowSchedule};
use crate::error::ConfigError;

/// One `{ weekday, start, end }` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowEntry {
    pub weekday: String,
    pub start: String,
    pub end: String,
}

impl WindowEntry {
    fn to_window(&self, field: &'static str) -> Result<ActiveWindow, ConfigError> {
        let weekday: Weekday = self
            .weekday
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field,
                reason: format!("unknown weekday {:?}", self.weekday),
            })?;
        let start = parse_time(field, &self.start)?;
        let end = parse_time(field, &self.end)?;
        ActiveWindow::new(weekday, start, end).map_err(|e| ConfigError::InvalidValue {
            field,
            reason: format!("{} {}-{}: {e}", self.weekday, self.start, self.end),
        })
    }
}

fn parse_time(field: &'static str, raw: &str) -> Result<NaiveTime, ConfigError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ConfigError::InvalidValue {
            field,
            reason: format!("expected HH:MM, got {raw:?}"),
        })
}

/// Parse `+HH:MM`, `-HH:MM`, `Z` or `UTC`.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let raw = raw.trim();
    let invalid = || ConfigError::InvalidValue {
        field: "schedule.utc_offset",
        reason: format!("expected +HH:MM, got {raw:?}"),
    };

    if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'+') => (1, &raw[1..]),
        Some(b'-') => (-1, &raw[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u8 = hours.parse().map_err(|_| invalid())?;
    let minutes: u8 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    let seconds = i32::from(hours) * 3600 + i32::from(minutes) * 60;
    FixedOffset::east_opt(sign * seconds).ok_or_else(invalid)
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Reference timezone for every window, as a fixed offset. It does not
    /// follow daylight saving: `-05:00` is US Eastern standard time only.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    /// How often the driver checks for due ticks.
    #[serde(default = "default_resolution_ms")]
    pub resolution_ms: u64,
    /// Symbols fetched concurrently per sampling pass.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Alert gate. Empty means always active.
    #[serde(default)]
    pub active_windows: Vec<WindowEntry>,
    /// Service on/off windows. Empty means always on.
    #[serde(default)]
    pub activation: Vec<WindowEntry>,
}

const fn default_poll_interval_secs() -> u64 {
    1800
}

const fn default_refresh_interval_secs() -> u64 {
    60
}

fn default_utc_offset() -> String {
    "+00:00".into()
}

const fn default_resolution_ms() -> u64 {
    1000
}

const fn default_max_concurrency() -> usize {
    4
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
            utc_offset: default_utc_offset(),
            resolution_ms: default_resolution_ms(),
            max_concurrency: default_max_concurrency(),
            active_windows: Vec::new(),
            activation: Vec::new(),
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("schedule.poll_interval_secs", self.poll_interval_secs),
            ("schedule.refresh_interval_secs", self.refresh_interval_secs),
            ("schedule.resolution_ms", self.resolution_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".into(),
                });
            }
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "schedule.max_concurrency",
                reason: "must be greater than 0".into(),
            });
        }
        self.active_schedule()?;
        self.activation_schedule()?;
        Ok(())
    }

    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        parse_utc_offset(&self.utc_offset)
    }

    /// Windows gating the alert cycle.
    pub fn active_schedule(&self) -> Result<WindowSchedule, ConfigError> {
        let windows = windows(&self.active_windows, "schedule.active_windows")?;
        Ok(WindowSchedule::new(windows, self.offset()?))
    }

    /// Service activation windows, or `None` to stay always on.
    pub fn activation_schedule(&self) -> Result<Option<WindowSchedule>, ConfigError> {
        if self.activation.is_empty() {
            return Ok(None);
        }
        let windows = windows(&self.activation, "schedule.activation")?;
        Ok(Some(WindowSchedule::new(windows, self.offset()?)))
    }

    pub fn scheduler_config(&self) -> Result<SchedulerConfig, ConfigError> {
        Ok(SchedulerConfig {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            refresh_interval: Duration::from_secs(self.refresh_interval_secs),
            activation: self.activation_schedule()?,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> Duration {
        Duration::from_millis(self.resolution_ms)
    }
}

fn windows(entries: &[WindowEntry], field: &'static str) -> Result<Vec<ActiveWindow>, ConfigError> {
    entries.iter().map(|e| e.to_window(field)).collect()
}
