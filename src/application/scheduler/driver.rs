//! Async driver that runs a [`Scheduler`] on a tokio task.
//!
//! Cycles run sequentially on the driver task. A shutdown signal that
//! arrives mid-cycle abandons the in-flight cycle by dropping its future,
//! so partial results never reach the transport.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::{CycleHandler, Scheduler, SchedulerState};
use crate::port::Clock;

/// Handle for controlling the scheduler task lifecycle.
pub struct SchedulerHandle {
    /// Channel for sending the shutdown signal.
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<SchedulerState>,
}

impl SchedulerHandle {
    /// Signal the scheduler to stop. An in-flight cycle is abandoned.
    pub async fn stop(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }

    /// Wait for the scheduler task to exit and return its final state.
    pub async fn join(self) -> SchedulerState {
        match self.task.await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Scheduler task ended abnormally");
                SchedulerState::Stopped
            }
        }
    }

    /// Stop the scheduler and wait for it to exit.
    pub async fn shutdown(self) -> SchedulerState {
        self.stop().await;
        self.join().await
    }
}

/// Start `scheduler` on a background task.
///
/// The task polls `clock` every `resolution` and hands due ticks to
/// `handler`. It runs until [`SchedulerHandle::stop`] is called or the
/// handle is dropped.
pub fn spawn(
    scheduler: Scheduler,
    handler: Arc<dyn CycleHandler>,
    clock: Arc<dyn Clock>,
    resolution: Duration,
) -> SchedulerHandle {
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    let task = tokio::spawn(run(scheduler, handler, clock, resolution, shutdown_rx));
    SchedulerHandle { shutdown_tx, task }
}

async fn run(
    mut scheduler: Scheduler,
    handler: Arc<dyn CycleHandler>,
    clock: Arc<dyn Clock>,
    resolution: Duration,
    mut shutdown_rx: mpsc::Receiver<()>,
) -> SchedulerState {
    scheduler.start(clock.now());

    let mut ticker = tokio::time::interval(resolution);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            _ = shutdown_rx.recv() => {
                info!("Scheduler shutting down");
                break;
            }

            _ = ticker.tick() => {}
        }

        let Some(tick) = scheduler.poll(clock.now()) else {
            continue;
        };

        debug!(
            cycle = %tick.kind,
            scheduled_at = %tick.scheduled_at,
            "Cycle starting"
        );

        tokio::select! {
            biased;

            _ = shutdown_rx.recv() => {
                warn!(cycle = %tick.kind, "Shutdown during cycle, abandoning in-flight results");
                break;
            }

            () = handler.on_tick(tick) => {}
        }

        if let Some(overrun) = scheduler.complete(&tick, clock.now()) {
            warn!(
                cycle = overrun.cycle,
                missed = overrun.missed,
                scheduled_at = %tick.scheduled_at,
                "{overrun}"
            );
        }
    }

    scheduler.stop();
    scheduler.state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::scheduler::{SchedulerConfig, Tick};
    use crate::domain::CycleKind;
    use crate::testkit::clock::TokioClock;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingHandler {
        ticks: Mutex<Vec<Tick>>,
        finished: AtomicUsize,
        cost: Duration,
    }

    #[async_trait]
    impl CycleHandler for RecordingHandler {
        async fn on_tick(&self, tick: Tick) {
            self.ticks.lock().push(tick);
            tokio::time::sleep(self.cost).await;
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn scheduler(poll: u64) -> Scheduler {
        Scheduler::new(&SchedulerConfig {
            poll_interval: Duration::from_secs(poll),
            refresh_interval: Duration::from_secs(1_000_000),
            activation: None,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_fires_on_schedule() {
        let handler = Arc::new(RecordingHandler {
            cost: Duration::from_secs(5),
            ..Default::default()
        });
        let clock = Arc::new(TokioClock::new());
        let start = clock.now();

        let handle = spawn(
            scheduler(1800),
            handler.clone(),
            clock,
            Duration::from_secs(1),
        );
        tokio::time::sleep(Duration::from_secs(65 * 60)).await;
        let state = handle.shutdown().await;

        assert_eq!(state, SchedulerState::Stopped);
        let ticks = handler.ticks.lock().clone();
        assert_eq!(ticks.len(), 2);
        assert!(ticks.iter().all(|t| t.kind == CycleKind::Alert));
        assert_eq!(ticks[0].scheduled_at, start + chrono::TimeDelta::seconds(1800));
        assert_eq!(ticks[1].scheduled_at, start + chrono::TimeDelta::seconds(3600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_abandons_in_flight_cycle() {
        let handler = Arc::new(RecordingHandler {
            cost: Duration::from_secs(600),
            ..Default::default()
        });

        let handle = spawn(
            scheduler(60),
            handler.clone(),
            Arc::new(TokioClock::new()),
            Duration::from_secs(1),
        );
        // The first cycle starts at +60s and would run until +660s.
        tokio::time::sleep(Duration::from_secs(120)).await;
        handle.shutdown().await;

        assert_eq!(handler.ticks.lock().len(), 1);
        assert_eq!(handler.finished.load(Ordering::SeqCst), 0);
    }
}
