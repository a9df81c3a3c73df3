//! Alert-level time window gating.

use chrono::{DateTime, Utc};

use crate::domain::WindowSchedule;

/// Decides whether an alert cycle may run at a given instant.
///
/// Wraps a [`WindowSchedule`]; an empty schedule keeps the gate open.
#[derive(Debug, Clone)]
pub struct WindowGate {
    schedule: WindowSchedule,
}

impl WindowGate {
    #[must_use]
    pub fn new(schedule: WindowSchedule) -> Self {
        Self { schedule }
    }

    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.schedule.contains(now)
    }

    pub fn schedule(&self) -> &WindowSchedule {
        &self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActiveWindow;
    use chrono::{FixedOffset, NaiveTime, TimeZone, Weekday};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn monday_gate(offset: FixedOffset) -> WindowGate {
        let window = ActiveWindow::new(Weekday::Mon, hm(14, 0), hm(22, 0)).unwrap();
        WindowGate::new(WindowSchedule::new(vec![window], offset))
    }

    // 2024-01-01 is a Monday.
    fn utc(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, h, m, 0).unwrap()
    }

    #[test]
    fn test_empty_schedule_always_active() {
        let gate = WindowGate::new(WindowSchedule::always(FixedOffset::east_opt(0).unwrap()));
        assert!(gate.is_active(utc(1, 3, 0)));
        assert!(gate.is_active(utc(6, 23, 59)));
    }

    #[test]
    fn test_window_boundaries() {
        let gate = monday_gate(FixedOffset::east_opt(0).unwrap());
        assert!(gate.is_active(utc(1, 14, 0)));
        assert!(!gate.is_active(utc(1, 13, 59)));
        assert!(gate.is_active(utc(1, 22, 0)));
        assert!(!gate.is_active(utc(1, 22, 1)));
        assert!(!gate.is_active(utc(2, 15, 0)));
    }

    #[test]
    fn test_reference_offset_applies() {
        // UTC+9: Monday 14:00 local is Monday 05:00 UTC.
        let gate = monday_gate(FixedOffset::east_opt(9 * 3600).unwrap());
        assert!(gate.is_active(utc(1, 5, 0)));
        assert!(!gate.is_active(utc(1, 14, 0)));
    }

    #[test]
    fn test_offset_can_shift_weekday() {
        // UTC-5: Tuesday 02:00 UTC is Monday 21:00 local.
        let gate = monday_gate(FixedOffset::west_opt(5 * 3600).unwrap());
        assert!(gate.is_active(utc(2, 2, 0)));
    }

    #[test]
    fn test_multiple_windows_same_weekday() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let schedule = WindowSchedule::new(
            vec![
                ActiveWindow::new(Weekday::Mon, hm(9, 0), hm(10, 0)).unwrap(),
                ActiveWindow::new(Weekday::Mon, hm(15, 0), hm(16, 0)).unwrap(),
            ],
            offset,
        );
        let gate = WindowGate::new(schedule);
        assert!(gate.is_active(utc(1, 9, 30)));
        assert!(!gate.is_active(utc(1, 12, 0)));
        assert!(gate.is_active(utc(1, 15, 30)));
    }
}
