//! Handler for the `run` command.

use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::sink::CliReportSink;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::SystemClock;

/// Run the monitor until Ctrl-C.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();

    print_startup(&config, config_path);

    let provider = bootstrap::build_provider(&config)?;
    let transport = bootstrap::build_transport(&config)?;
    let handle = bootstrap::start(
        &config,
        provider,
        transport,
        Arc::new(CliReportSink),
        Arc::new(SystemClock),
    )?;

    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, shutting down");
    }
    info!("Shutdown signal received");

    let state = handle.shutdown().await;
    info!(state = ?state, "stockwatch stopped");
    output::success("Stopped");
    Ok(())
}

fn print_startup(config: &Config, path: &Path) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Config", path.display());
    output::field("Symbols", config.symbols.join(", "));
    output::field("Drop", format!("{}%", config.thresholds.drop_pct));
    output::field(
        "Pattern",
        format!(
            "{}% per {}",
            config.thresholds.pattern_pct, config.thresholds.pattern_period
        ),
    );
    output::field("Notifier", config.notifier.kind);
    output::field(
        "Poll",
        format!("every {}s", config.schedule.poll_interval_secs),
    );
    output::hint("press Ctrl-C to stop");
}
