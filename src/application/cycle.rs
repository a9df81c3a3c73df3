//! One monitoring cycle, end to end.
//!
//! ```text
//! Tick --> WindowGate --> Sampler --> ThresholdEvaluator --> AlertAggregator
//!              |                                                   |
//!          (closed: skip)                             (non-empty) v
//!                                                    NotificationDispatcher
//! ```
//!
//! Every fault stays inside the symbol or cycle that caused it: sampling
//! failures become [`UnavailableSymbol`] markers and delivery failures are
//! logged. Nothing is carried into the next cycle.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::aggregator::AlertAggregator;
use super::dispatcher::{Delivered, NotificationDispatcher};
use super::evaluator::ThresholdEvaluator;
use super::gate::WindowGate;
use super::sampler::{Sampler, SymbolSample};
use super::scheduler::{CycleHandler, Tick};
use crate::domain::{AlertEvent, CycleKind, SamplingWindow, TrackedSymbol};
use crate::error::DeliveryFailed;
use crate::port::{CycleReport, LatestQuote, ReportSink, UnavailableSymbol};

/// What happened in one cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The alert window was closed; nothing was sampled.
    Skipped,
    /// Alert cycle ran. `delivery` is `None` when no alert triggered.
    Evaluated {
        alerts: usize,
        unavailable: usize,
        delivery: Option<Result<Delivered, DeliveryFailed>>,
    },
    /// Refresh cycle ran.
    Refreshed { quotes: usize, unavailable: usize },
}

/// Runs alert and refresh cycles over a fixed symbol list.
pub struct CycleRunner {
    symbols: Vec<TrackedSymbol>,
    sampler: Sampler,
    evaluator: ThresholdEvaluator,
    gate: WindowGate,
    aggregator: AlertAggregator,
    dispatcher: NotificationDispatcher,
    sink: Arc<dyn ReportSink>,
}

impl CycleRunner {
    pub fn new(
        symbols: Vec<TrackedSymbol>,
        sampler: Sampler,
        evaluator: ThresholdEvaluator,
        gate: WindowGate,
        dispatcher: NotificationDispatcher,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            symbols,
            sampler,
            evaluator,
            gate,
            aggregator: AlertAggregator,
            dispatcher,
            sink,
        }
    }

    pub fn symbols(&self) -> &[TrackedSymbol] {
        &self.symbols
    }

    /// Gate, sample, evaluate, aggregate, dispatch, then publish.
    pub async fn run_alert_cycle(&self, now: DateTime<Utc>) -> CycleOutcome {
        if !self.gate.is_active(now) {
            debug!(at = %now, "Outside active window, skipping alert cycle");
            return CycleOutcome::Skipped;
        }

        let report = self.evaluate(now).await;

        let delivery = match self.aggregator.collect(report.alerts.clone()) {
            Some(batch) => Some(self.dispatcher.send(&batch).await),
            None => {
                debug!("No alerts triggered this cycle");
                None
            }
        };

        info!(
            alerts = report.alerts.len(),
            unavailable = report.unavailable.len(),
            delivered = delivery.as_ref().is_some_and(Result::is_ok),
            "Alert cycle complete"
        );

        self.sink.publish(&report);

        CycleOutcome::Evaluated {
            alerts: report.alerts.len(),
            unavailable: report.unavailable.len(),
            delivery,
        }
    }

    /// Sample and evaluate every symbol without gating or dispatch.
    pub async fn evaluate(&self, now: DateTime<Utc>) -> CycleReport {
        let period = self.evaluator.config().pattern_period;
        let drop_samples = self
            .sampler
            .fetch(&self.symbols, SamplingWindow::DAILY_CLOSES)
            .await;
        let pattern_samples = self.sampler.fetch(&self.symbols, period.sampling()).await;

        let mut report = CycleReport {
            kind: CycleKind::Alert,
            generated_at: now,
            latest: Vec::new(),
            alerts: Vec::new(),
            unavailable: Vec::new(),
        };

        for (drop_sample, pattern_sample) in drop_samples.into_iter().zip(pattern_samples) {
            let symbol = drop_sample.symbol;
            let mut alerts: Vec<AlertEvent> = Vec::with_capacity(2);
            let mut failure = None;

            match &drop_sample.history {
                Ok(history) => {
                    if let Some(point) = history.latest() {
                        report.latest.push(LatestQuote {
                            symbol: symbol.clone(),
                            point: *point,
                        });
                    }
                    alerts.extend(self.evaluator.drop(&symbol, history, now));
                }
                Err(reason) => failure = Some(reason.clone()),
            }

            match &pattern_sample.history {
                Ok(history) => alerts.extend(self.evaluator.pattern(&symbol, history, now)),
                Err(reason) => {
                    failure.get_or_insert_with(|| reason.clone());
                }
            }

            report.alerts.extend(alerts);
            if let Some(reason) = failure {
                report.unavailable.push(UnavailableSymbol { symbol, reason });
            }
        }

        report
    }

    /// Sample the intraday view and publish it. Never dispatches.
    pub async fn run_refresh_cycle(&self, now: DateTime<Utc>) -> CycleOutcome {
        let samples = self
            .sampler
            .fetch(&self.symbols, SamplingWindow::INTRADAY)
            .await;
        let report = refresh_report(samples, now);

        debug!(
            quotes = report.latest.len(),
            unavailable = report.unavailable.len(),
            "Refresh cycle complete"
        );
        self.sink.publish(&report);

        CycleOutcome::Refreshed {
            quotes: report.latest.len(),
            unavailable: report.unavailable.len(),
        }
    }
}

fn refresh_report(samples: Vec<SymbolSample>, now: DateTime<Utc>) -> CycleReport {
    let mut latest = Vec::new();
    let mut unavailable = Vec::new();
    for sample in samples {
        match sample.history {
            Ok(history) => {
                if let Some(point) = history.latest() {
                    latest.push(LatestQuote {
                        symbol: sample.symbol,
                        point: *point,
                    });
                }
            }
            Err(reason) => unavailable.push(UnavailableSymbol {
                symbol: sample.symbol,
                reason,
            }),
        }
    }
    CycleReport {
        kind: CycleKind::Refresh,
        generated_at: now,
        latest,
        alerts: Vec::new(),
        unavailable,
    }
}

#[async_trait]
impl CycleHandler for CycleRunner {
    async fn on_tick(&self, tick: Tick) {
        match tick.kind {
            CycleKind::Alert => {
                self.run_alert_cycle(tick.fired_at).await;
                if tick.refresh_folded {
                    self.run_refresh_cycle(tick.fired_at).await;
                }
            }
            CycleKind::Refresh => {
                self.run_refresh_cycle(tick.fired_at).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::evaluator::ThresholdConfig;
    use crate::domain::{ActiveWindow, PatternPeriod, WindowSchedule};
    use crate::error::DataUnavailable;
    use crate::port::NullReportSink;
    use crate::testkit::provider::ScriptedProvider;
    use crate::testkit::transport::RecordingTransport;
    use chrono::{FixedOffset, NaiveTime, TimeZone, Weekday};
    use std::time::Duration;

    // 2024-01-01 is a Monday.
    fn monday(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap()
    }

    fn runner(
        provider: ScriptedProvider,
        transport: &RecordingTransport,
        gate: WindowGate,
        symbols: &[&str],
    ) -> CycleRunner {
        CycleRunner::new(
            symbols
                .iter()
                .map(|s| TrackedSymbol::parse(s).unwrap())
                .collect(),
            Sampler::new(Arc::new(provider), 4),
            ThresholdEvaluator::new(ThresholdConfig {
                drop_threshold_pct: 10.0,
                pattern_threshold_pct: 50.0,
                pattern_period: PatternPeriod::Daily,
            }),
            gate,
            NotificationDispatcher::new(
                Arc::new(transport.clone()),
                "Stock Alert",
                Duration::from_secs(1),
            ),
            Arc::new(NullReportSink),
        )
    }

    fn open_gate() -> WindowGate {
        WindowGate::new(WindowSchedule::always(FixedOffset::east_opt(0).unwrap()))
    }

    #[tokio::test]
    async fn test_closed_gate_skips_sampling() {
        let provider = ScriptedProvider::new().with_closes("AAPL", &[100.0, 50.0]);
        let calls = provider.call_count();
        let window = ActiveWindow::new(
            Weekday::Tue,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
        .unwrap();
        let gate = WindowGate::new(WindowSchedule::new(
            vec![window],
            FixedOffset::east_opt(0).unwrap(),
        ));
        let transport = RecordingTransport::new();
        let runner = runner(provider, &transport, gate, &["AAPL"]);

        let outcome = runner.run_alert_cycle(monday(12)).await;

        assert_eq!(outcome, CycleOutcome::Skipped);
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert!(transport.messages().is_empty());
    }

    #[tokio::test]
    async fn test_no_alerts_means_no_dispatch() {
        let provider = ScriptedProvider::new().with_closes("AAPL", &[100.0, 99.0]);
        let transport = RecordingTransport::new();
        let runner = runner(provider, &transport, open_gate(), &["AAPL"]);

        let outcome = runner.run_alert_cycle(monday(12)).await;

        assert_eq!(
            outcome,
            CycleOutcome::Evaluated {
                alerts: 0,
                unavailable: 0,
                delivery: None
            }
        );
        assert!(transport.messages().is_empty());
    }

    #[tokio::test]
    async fn test_alerts_consolidated_into_one_message() {
        let provider = ScriptedProvider::new()
            .with_closes("AAPL", &[100.0, 90.0])
            .with_closes("TSLA", &[200.0, 150.0]);
        let transport = RecordingTransport::new();
        let runner = runner(provider, &transport, open_gate(), &["AAPL", "TSLA"]);

        runner.run_alert_cycle(monday(12)).await;

        let sent = transport.messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, "AAPL dropped 10.00% \nTSLA dropped 25.00% ");
    }

    #[tokio::test]
    async fn test_delivery_failure_is_contained() {
        let provider = ScriptedProvider::new().with_closes("AAPL", &[100.0, 80.0]);
        let transport = RecordingTransport::failing(DeliveryFailed::Transport("down".into()));
        let runner = runner(provider, &transport, open_gate(), &["AAPL"]);

        let outcome = runner.run_alert_cycle(monday(12)).await;

        match outcome {
            CycleOutcome::Evaluated {
                alerts: 1,
                delivery: Some(Err(DeliveryFailed::Transport(_))),
                ..
            } => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_evaluate_marks_unavailable_symbols() {
        let provider = ScriptedProvider::new()
            .with_closes("AAPL", &[100.0, 90.0])
            .with_error("NOPE", DataUnavailable::UnknownSymbol("NOPE".into()));
        let transport = RecordingTransport::new();
        let runner = runner(provider, &transport, open_gate(), &["AAPL", "NOPE"]);

        let report = runner.evaluate(monday(12)).await;

        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.latest.len(), 1);
        assert_eq!(report.unavailable.len(), 1);
        assert_eq!(report.unavailable[0].symbol.as_str(), "NOPE");
        assert!(transport.messages().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_never_dispatches() {
        let provider = ScriptedProvider::new()
            .with_closes("AAPL", &[100.0, 10.0])
            .with_error("NOPE", DataUnavailable::EmptyHistory);
        let transport = RecordingTransport::new();
        let runner = runner(provider, &transport, open_gate(), &["AAPL", "NOPE"]);

        let outcome = runner.run_refresh_cycle(monday(12)).await;

        assert_eq!(
            outcome,
            CycleOutcome::Refreshed {
                quotes: 1,
                unavailable: 1
            }
        );
        assert!(transport.messages().is_empty());
    }
}
