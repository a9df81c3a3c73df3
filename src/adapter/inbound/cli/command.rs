//! Command-line interface definitions.
//!
//! Defines the CLI structure for stockwatch using `clap`: run the monitor,
//! validate configuration, test the notifier, or take a one-off sample.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Threshold-based stock price monitor with push alerts
#[derive(Parser, Debug)]
#[command(name = "stockwatch")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the monitor until interrupted
    Run(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Evaluate every symbol once and print the results without notifying
    Sample(ConfigPathArg),
}

/// Subcommands for `stockwatch check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and print the effective settings.
    Config(ConfigPathArg),
    /// Send a test message through the configured transport.
    Notifier(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_notifier_with_global_flags() {
        let cli = Cli::try_parse_from([
            "stockwatch",
            "check",
            "notifier",
            "--config",
            "alt.toml",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(!cli.quiet);
        match cli.command {
            Commands::Check(CheckCommand::Notifier(args)) => {
                assert_eq!(args.config, PathBuf::from("alt.toml"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_path_defaults() {
        let cli = Cli::try_parse_from(["stockwatch", "-q", "run"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Run(args) => assert_eq!(args.config, PathBuf::from("config.toml")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["stockwatch"]).is_err());
    }
}
