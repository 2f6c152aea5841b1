mod cli;
mod commands;
mod logging;
mod traits;

use anyhow::Result;
use clap::Parser;
use cli::{Commands, HubCli};
use commands::{ReceiveRunner, SendBatchRunner, SendRunner};
use traits::CommandRunner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = HubCli::parse();
    let config = cli.config();

    logging::initialise_tracing(config.verbose(), cli.log_format)?;

    match cli.command {
        Commands::Receive(args) => ReceiveRunner::from(args).run(&config).await?,
        Commands::Send(args) => SendRunner::from(args).run(&config).await?,
        Commands::SendBatch(args) => SendBatchRunner::from(args).run(&config).await?,
    };

    Ok(())
}
