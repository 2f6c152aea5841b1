use crate::cli::SendArgs;
use crate::traits::CommandRunner;
use anyhow::{Context, Result};
use async_trait::async_trait;
use hubcast::{input, BatchPacker, HubConfig, HubConnection, PackingPolicy};
use std::iter;
use tracing::{info, instrument};

pub struct SendRunner {
    args: SendArgs,
}

impl From<SendArgs> for SendRunner {
    fn from(args: SendArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl CommandRunner for SendRunner {
    #[instrument(skip_all, fields(hub = config.hub_name()))]
    async fn run(self, config: &HubConfig) -> Result<()> {
        let SendArgs {
            text,
            partition_key,
        } = self.args;

        let payload = input::read_single(text, std::io::stdin()).context("read event")?;

        let connection = HubConnection::connect(config)
            .await
            .context("connect to hub")?;
        let sink = connection.sink().await.context("open hub")?;

        // A single payload always fits one batch, so this is exactly one send.
        BatchPacker::new(&sink, PackingPolicy::Bounded)
            .partition_key(partition_key.as_deref())
            .pack(iter::once(payload))
            .await
            .context("send event")?;

        info!("Sent event");

        Ok(())
    }
}
