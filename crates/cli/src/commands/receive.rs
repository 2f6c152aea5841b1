use crate::cli::ReceiveArgs;
use crate::traits::CommandRunner;
use anyhow::{Context, Result};
use async_trait::async_trait;
use hubcast::{receive, HubConfig, HubConnection};
use tracing::{info, instrument};

pub struct ReceiveRunner {
    args: ReceiveArgs,
}

impl From<ReceiveArgs> for ReceiveRunner {
    fn from(args: ReceiveArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl CommandRunner for ReceiveRunner {
    #[instrument(skip_all, fields(hub = config.hub_name(), consumer_group = config.consumer_group()))]
    async fn run(self, config: &HubConfig) -> Result<()> {
        let connection = HubConnection::connect(config)
            .await
            .context("connect to hub")?;
        let source = connection.source().await.context("open hub")?;
        let mut stdout = std::io::stdout();

        tokio::select! {
            received = receive(&source, self.args.starting_position, self.args.max_events, &mut stdout) => {
                let received = received.context("receive events")?;
                info!(received, "Stopped receiving");
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("listen for interrupt")?;
                info!("Interrupted, stopped receiving");
            }
        }

        Ok(())
    }
}
