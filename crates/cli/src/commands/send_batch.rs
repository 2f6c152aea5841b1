use crate::cli::SendBatchArgs;
use crate::traits::CommandRunner;
use anyhow::{Context, Result};
use async_trait::async_trait;
use hubcast::{BatchPacker, HubConfig, HubConnection, InputSource, PackingPolicy};
use tracing::{info, instrument};

pub struct SendBatchRunner {
    args: SendBatchArgs,
}

impl From<SendBatchArgs> for SendBatchRunner {
    fn from(args: SendBatchArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl CommandRunner for SendBatchRunner {
    #[instrument(skip_all, fields(hub = config.hub_name()))]
    async fn run(self, config: &HubConfig) -> Result<()> {
        let SendBatchArgs {
            texts,
            file,
            partition_key,
            batch_size,
        } = self.args;

        let payloads = InputSource::resolve(texts, Some(file))
            .read_payloads()
            .context("read events")?;

        let connection = HubConnection::connect(config)
            .await
            .context("connect to hub")?;
        let sink = connection.sink().await.context("open hub")?;

        let report = BatchPacker::new(&sink, PackingPolicy::from(batch_size))
            .partition_key(partition_key.as_deref())
            .pack(payloads)
            .await
            .context("send events")?;

        info!(
            events = report.events,
            batches = report.batches,
            "Sent events"
        );

        Ok(())
    }
}
