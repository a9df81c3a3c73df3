//! CLI output formatting.
//!
//! Human-readable output uses colored symbols; `--json` switches every
//! helper to one JSON object per line and `--quiet` suppresses the rest.
//! Errors and warnings are always printed.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    *config_cell().read()
}

/// Whether a human-readable line survives `--quiet`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Priority {
    Essential,
    Regular,
}

/// Route one output event: a `{"type", "payload"}` line in JSON mode,
/// otherwise the `human` rendering unless quiet mode hides it.
fn emit(kind: &str, priority: Priority, payload: impl FnOnce() -> Value, human: impl FnOnce()) {
    let config = read_config();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload() }));
    } else if !(config.quiet && priority == Priority::Regular) {
        human();
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *config_cell().write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    emit(
        "header",
        Priority::Regular,
        || json!({ "app": "stockwatch", "version": version }),
        || {
            println!("{} {}", "stockwatch".bold(), version.dimmed());
            println!();
        },
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        Priority::Regular,
        || json!({ "label": label, "value": &value }),
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit(
        "success",
        Priority::Regular,
        || json!({ "message": message }),
        || println!("  {} {}", "✓".green(), message),
    );
}

pub fn warning(message: &str) {
    emit(
        "warning",
        Priority::Essential,
        || json!({ "message": message }),
        || println!("  {} {}", "⚠".yellow(), message),
    );
}

/// Print an error line to stderr, in either mode.
pub fn error(message: &str) {
    if read_config().json {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

pub fn section(title: &str) {
    emit(
        "section",
        Priority::Regular,
        || json!({ "title": title }),
        || {
            println!();
            println!("{}", title.bold());
        },
    );
}

/// Print the latest close for a symbol.
pub fn quote(timestamp: &str, symbol: &str, close: f64) {
    emit(
        "quote",
        Priority::Regular,
        || json!({ "timestamp": timestamp, "symbol": symbol, "close": close }),
        || println!("  {} {:<8} {:>12.2}", timestamp.dimmed(), symbol.cyan(), close),
    );
}

/// Print a triggered alert. Shown even in quiet mode.
pub fn alert(timestamp: &str, symbol: &str, change_pct: f64, message: &str) {
    emit(
        "alert",
        Priority::Essential,
        || {
            json!({
                "timestamp": timestamp,
                "symbol": symbol,
                "change_pct": change_pct,
                "message": message,
            })
        },
        || println!("  {} {} {}", timestamp.dimmed(), "alert".yellow(), message.trim_end()),
    );
}

/// Print a symbol that returned no data.
pub fn unavailable(timestamp: &str, symbol: &str, reason: &str) {
    emit(
        "unavailable",
        Priority::Regular,
        || json!({ "timestamp": timestamp, "symbol": symbol, "reason": reason }),
        || {
            println!(
                "  {} {} {} {}",
                timestamp.dimmed(),
                "unavailable".red(),
                symbol,
                reason.dimmed()
            );
        },
    );
}

pub fn hint(message: &str) {
    emit(
        "hint",
        Priority::Regular,
        || json!({ "message": message }),
        || println!("  {} {}", "→".dimmed(), message.dimmed()),
    );
}

/// Print a raw JSON document (only in JSON mode).
pub fn json_output(value: Value) {
    if read_config().json {
        println!("{value}");
    }
}
