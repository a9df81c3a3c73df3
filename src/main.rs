use anyhow::Context;
use clap::Parser;
use stockwatch::adapter::inbound::cli::command::Cli;
use stockwatch::adapter::inbound::cli::dispatch::dispatch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    dispatch(cli).await.context("stockwatch failed")?;
    Ok(())
}
