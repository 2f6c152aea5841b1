use super::subject_for;
use crate::batching::MessageBatch;
use crate::errors::{Result, TransportError};
use crate::traits::{EventBatch, EventSink};
use async_nats::jetstream;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Publishes batches to a hub.
///
/// Sending a batch publishes each payload in order and then waits for the hub to acknowledge
/// all of them, so a successful send means every event in the batch has been stored.
pub struct JetStreamSink {
    jetstream: jetstream::Context,
    hub_name: String,
    max_batch_bytes: usize,
}

impl JetStreamSink {
    pub fn new(jetstream: jetstream::Context, hub_name: &str, max_batch_bytes: usize) -> Self {
        Self {
            jetstream,
            hub_name: hub_name.to_owned(),
            max_batch_bytes,
        }
    }
}

#[async_trait]
impl EventSink for JetStreamSink {
    type Batch = MessageBatch;

    async fn create_batch(&self) -> Result<Self::Batch> {
        Ok(MessageBatch::new(self.max_batch_bytes))
    }

    #[instrument(skip_all, fields(hub = %self.hub_name, events = batch.len(), size = batch.size_bytes()))]
    async fn send_batch(&self, batch: Self::Batch, partition_key: Option<&str>) -> Result<()> {
        let subject = subject_for(&self.hub_name, partition_key)?;
        let events = batch.len();
        let mut acks = Vec::with_capacity(events);

        for payload in batch.into_payloads() {
            let ack = self
                .jetstream
                .publish(subject.clone(), payload.into_bytes())
                .await
                .map_err(|err| TransportError::Send(events, err.into()))?;

            acks.push(ack);
        }

        for ack in acks {
            ack.await
                .map_err(|err| TransportError::Send(events, err.into()))?;
        }

        debug!(subject = %subject, "Hub acknowledged batch");

        Ok(())
    }
}
