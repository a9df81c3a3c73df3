//! Scheduler state machine and tick types.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::Cadence;
use crate::domain::{CycleKind, WindowSchedule};
use crate::error::SchedulerOverrun;

/// Lifecycle state of a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    /// Outside the activation schedule; no ticks fire.
    Dormant,
    /// Terminal.
    Stopped,
}

/// A cycle the scheduler wants run now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub kind: CycleKind,
    pub scheduled_at: DateTime<Utc>,
    pub fired_at: DateTime<Utc>,
    /// A refresh tick was due at the same poll and rides along with this
    /// alert tick. The handler still owes that refresh.
    pub refresh_folded: bool,
}

/// Tick callback invoked by the driver, one cycle at a time.
#[async_trait]
pub trait CycleHandler: Send + Sync {
    async fn on_tick(&self, tick: Tick);
}

/// Scheduler timing parameters.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Alert cycle cadence.
    pub poll_interval: Duration,
    /// Display refresh cadence.
    pub refresh_interval: Duration,
    /// Service-level on/off windows. `None` keeps the service always on.
    pub activation: Option<WindowSchedule>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1800),
            refresh_interval: Duration::from_secs(60),
            activation: None,
        }
    }
}

/// Drift-free two-cadence scheduler.
#[derive(Debug)]
pub struct Scheduler {
    state: SchedulerState,
    alert: Cadence,
    refresh: Cadence,
    activation: Option<WindowSchedule>,
}

impl Scheduler {
    #[must_use]
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            state: SchedulerState::Idle,
            alert: Cadence::new(config.poll_interval),
            refresh: Cadence::new(config.refresh_interval),
            activation: config.activation.clone(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Next scheduled instant for `kind`, if any.
    #[must_use]
    pub fn next_due(&self, kind: CycleKind) -> Option<DateTime<Utc>> {
        self.cadence(kind).next_due()
    }

    /// Leave `Idle`. Goes `Dormant` when outside the activation schedule.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.state != SchedulerState::Idle {
            warn!(state = ?self.state, "Scheduler start ignored");
            return;
        }
        if self.activation_open(now) {
            self.resume(now);
        } else {
            self.state = SchedulerState::Dormant;
            info!("Scheduler started outside activation window, dormant");
        }
    }

    /// Enter the terminal `Stopped` state.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Stopped {
            return;
        }
        self.alert.clear();
        self.refresh.clear();
        self.state = SchedulerState::Stopped;
        info!("Scheduler stopped");
    }

    /// Apply activation transitions and return the tick due at `now`.
    ///
    /// At most one tick is returned. When both cadences are due the alert
    /// tick is returned with [`Tick::refresh_folded`] set.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<Tick> {
        match self.state {
            SchedulerState::Idle | SchedulerState::Stopped => return None,
            SchedulerState::Dormant => {
                if self.activation_open(now) {
                    self.resume(now);
                }
                return None;
            }
            SchedulerState::Running => {
                if !self.activation_open(now) {
                    self.alert.clear();
                    self.refresh.clear();
                    self.state = SchedulerState::Dormant;
                    info!(at = %now, "Activation window closed, scheduler dormant");
                    return None;
                }
            }
        }

        if let Some(scheduled_at) = self.alert.next_due().filter(|_| self.alert.is_due(now)) {
            let refresh_folded = self.refresh.is_due(now);
            if refresh_folded {
                self.refresh.advance(now);
                debug!(at = %now, "Refresh tick coalesced into alert cycle");
            }
            return Some(Tick {
                kind: CycleKind::Alert,
                scheduled_at,
                fired_at: now,
                refresh_folded,
            });
        }

        self.refresh
            .next_due()
            .filter(|_| self.refresh.is_due(now))
            .map(|scheduled_at| Tick {
                kind: CycleKind::Refresh,
                scheduled_at,
                fired_at: now,
                refresh_folded: false,
            })
    }

    /// Record that `tick` finished at `finished_at` and schedule the next one.
    ///
    /// Returns an overrun when the cycle ran past later ticks, which are dropped.
    pub fn complete(&mut self, tick: &Tick, finished_at: DateTime<Utc>) -> Option<SchedulerOverrun> {
        if self.state != SchedulerState::Running {
            return None;
        }
        let cadence = match tick.kind {
            CycleKind::Alert => &mut self.alert,
            CycleKind::Refresh => &mut self.refresh,
        };
        if cadence.next_due() != Some(tick.scheduled_at) {
            return None;
        }
        let missed = cadence.advance(finished_at);
        (missed > 0).then(|| SchedulerOverrun {
            cycle: tick.kind.as_str(),
            missed,
        })
    }

    fn cadence(&self, kind: CycleKind) -> &Cadence {
        match kind {
            CycleKind::Alert => &self.alert,
            CycleKind::Refresh => &self.refresh,
        }
    }

    fn activation_open(&self, now: DateTime<Utc>) -> bool {
        self.activation
            .as_ref()
            .map_or(true, |schedule| schedule.contains(now))
    }

    fn resume(&mut self, now: DateTime<Utc>) {
        let was_dormant = self.state == SchedulerState::Dormant;
        self.alert.anchor(now);
        self.refresh.anchor(now);
        self.state = SchedulerState::Running;
        if was_dormant {
            info!(at = %now, "Activation window opened, scheduler running");
        } else {
            info!(at = %now, "Scheduler running");
        }
    }
}
