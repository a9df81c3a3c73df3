//! Composition root: turns a validated [`Config`] into running components.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::notifier::{LogTransport, PushbulletTransport};
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::TelegramTransport;
use crate::adapter::outbound::yahoo::YahooChartProvider;
use crate::application::cycle::CycleRunner;
use crate::application::dispatcher::NotificationDispatcher;
use crate::application::evaluator::ThresholdEvaluator;
use crate::application::gate::WindowGate;
use crate::application::sampler::Sampler;
use crate::application::scheduler::{self, Scheduler, SchedulerHandle};
use crate::error::Result;
use crate::infrastructure::config::notifier::Credentials;
use crate::infrastructure::config::settings::Config;
use crate::port::{Clock, MarketDataProvider, NotificationTransport, ReportSink};

/// Build the market data provider.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the HTTP client cannot be built.
pub fn build_provider(config: &Config) -> Result<Arc<dyn MarketDataProvider>> {
    let provider = YahooChartProvider::new(&config.market_data.base_url, config.market_data.timeout())?;
    Ok(Arc::new(provider))
}

/// Build the notification transport selected in `[notifier]`.
///
/// # Errors
///
/// Returns an error if the transport cannot be constructed.
pub fn build_transport(config: &Config) -> Result<Arc<dyn NotificationTransport>> {
    let transport: Arc<dyn NotificationTransport> = match &config.credentials {
        Credentials::None => Arc::new(LogTransport),
        #[cfg(feature = "telegram")]
        Credentials::Telegram(tg) => Arc::new(TelegramTransport::new(tg)),
        Credentials::Pushbullet(pb) => {
            Arc::new(PushbulletTransport::new(pb.clone(), config.notifier.timeout())?)
        }
    };
    info!(transport = transport.name(), "Notification transport ready");
    Ok(transport)
}

/// Assemble the cycle runner around the given collaborators.
///
/// # Errors
///
/// Returns an error if the configuration fails re-validation.
pub fn build_runner(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
    transport: Arc<dyn NotificationTransport>,
    sink: Arc<dyn ReportSink>,
) -> Result<CycleRunner> {
    let symbols = config.tracked_symbols()?;
    let gate = WindowGate::new(config.schedule.active_schedule()?);

    Ok(CycleRunner::new(
        symbols,
        Sampler::new(provider, config.schedule.max_concurrency),
        ThresholdEvaluator::new(config.thresholds.to_threshold_config()),
        gate,
        NotificationDispatcher::new(
            transport,
            config.notifier.title.clone(),
            config.notifier.timeout(),
        ),
        sink,
    ))
}

/// Build an idle scheduler.
///
/// # Errors
///
/// Returns an error if the activation schedule is invalid.
pub fn build_scheduler(config: &Config) -> Result<Scheduler> {
    Ok(Scheduler::new(&config.schedule.scheduler_config()?))
}

/// Wire everything and start the scheduler on a background task.
///
/// # Errors
///
/// Returns an error if any component fails to build.
pub fn start(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
    transport: Arc<dyn NotificationTransport>,
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
) -> Result<SchedulerHandle> {
    let runner = build_runner(config, provider, transport, sink)?;
    let scheduler = build_scheduler(config)?;

    info!(
        symbols = runner.symbols().len(),
        poll_interval_secs = config.schedule.poll_interval_secs,
        refresh_interval_secs = config.schedule.refresh_interval_secs,
        "Starting scheduler"
    );

    Ok(scheduler::spawn(
        scheduler,
        Arc::new(runner),
        clock,
        config.schedule.resolution(),
    ))
}
