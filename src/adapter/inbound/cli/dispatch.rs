//! Command routing.

use super::command::{CheckCommand, Cli, Commands};
use super::{check, output, run, sample};
use crate::error::Result;

/// Route a parsed command line to its handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Run(args) => run::execute(&args.config).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
        Commands::Check(CheckCommand::Notifier(args)) => {
            check::execute_notifier(&args.config).await
        }
        Commands::Sample(args) => sample::execute(&args.config).await,
    }
}
