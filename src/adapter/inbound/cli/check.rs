//! Configuration and notifier check handlers.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file and print the effective settings.
pub fn execute_config(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let active = config.schedule.active_schedule()?;
    let activation = config.schedule.activation_schedule()?;
    let windows: Vec<String> = active.windows().iter().map(ToString::to_string).collect();
    let activation: Option<Vec<String>> =
        activation.map(|s| s.windows().iter().map(ToString::to_string).collect());

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "status": "valid",
            "symbols": config.tracked_symbols()?.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "drop_pct": config.thresholds.drop_pct,
            "pattern_pct": config.thresholds.pattern_pct,
            "pattern_period": config.thresholds.pattern_period,
            "poll_interval_secs": config.schedule.poll_interval_secs,
            "refresh_interval_secs": config.schedule.refresh_interval_secs,
            "utc_offset": config.schedule.offset()?.to_string(),
            "active_windows": windows,
            "activation": activation,
            "notifier": config.notifier.kind.as_str(),
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Symbols", config.symbols.join(", "));
    output::field("Drop", format!("{}%", config.thresholds.drop_pct));
    output::field(
        "Pattern",
        format!(
            "{}% per {}",
            config.thresholds.pattern_pct, config.thresholds.pattern_period
        ),
    );
    output::field("Poll", format!("{}s", config.schedule.poll_interval_secs));
    output::field("Refresh", format!("{}s", config.schedule.refresh_interval_secs));
    output::field("UTC offset", config.schedule.offset()?);
    if windows.is_empty() {
        output::field("Windows", "always");
    } else {
        output::field("Windows", windows.join(", "));
    }
    match activation {
        Some(activation) => output::field("Activation", activation.join(", ")),
        None => output::field("Activation", "always on"),
    }
    output::field("Notifier", config.notifier.kind);

    output::success("Configuration check complete");
    Ok(())
}

/// Send a test message through the configured transport.
pub async fn execute_notifier(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let transport = bootstrap::build_transport(&config)?;

    transport
        .deliver(&config.notifier.title, "stockwatch test notification")
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.notifier",
            "transport": transport.name(),
            "status": "sent",
        }));
        return Ok(());
    }

    output::section("Notifier Check");
    output::field("Transport", transport.name());
    output::success("Test message sent");
    output::hint("check your device for the message");
    Ok(())
}
