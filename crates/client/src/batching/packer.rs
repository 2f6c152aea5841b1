use super::PackingPolicy;
use crate::errors::{HubError, Result};
use crate::payload::EventPayload;
use crate::traits::{EventBatch, EventSink, Overflow};
use tracing::{debug, instrument};

/// Totals for a completed packing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackReport {
    pub batches: usize,
    pub events: usize,
}

/// Packs a sequence of payloads into as few batches as the sink allows, sending each batch as
/// soon as it is full. See the [module documentation](super) for the algorithm.
pub struct BatchPacker<'a, S> {
    sink: &'a S,
    policy: PackingPolicy,
    partition_key: Option<&'a str>,
}

impl<'a, S> BatchPacker<'a, S>
where
    S: EventSink,
{
    pub fn new(sink: &'a S, policy: PackingPolicy) -> Self {
        Self {
            sink,
            policy,
            partition_key: None,
        }
    }

    /// Routes every batch sent by this packer with the given key.
    pub fn partition_key(mut self, partition_key: Option<&'a str>) -> Self {
        self.partition_key = partition_key;
        self
    }

    /// Packs and sends `payloads`.
    ///
    /// # Errors
    ///
    /// Returns [HubError::PayloadTooLarge] if a payload does not fit in an empty batch. Batches
    /// completed before that payload have already been sent. Any error raised by the sink is
    /// returned unchanged.
    #[instrument(skip_all, fields(policy = ?self.policy, partition_key = ?self.partition_key))]
    pub async fn pack<I>(&self, payloads: I) -> Result<PackReport>
    where
        I: IntoIterator<Item = EventPayload>,
    {
        let mut report = PackReport::default();

        match self.policy.chunk_size() {
            None => self.pack_chunk(payloads.into_iter(), &mut report).await?,
            Some(chunk_size) => {
                let mut payloads = payloads.into_iter().peekable();

                while payloads.peek().is_some() {
                    let chunk = payloads.by_ref().take(chunk_size);
                    self.pack_chunk(chunk, &mut report).await?;
                }
            }
        }

        debug!(
            batches = report.batches,
            events = report.events,
            "Finished packing events"
        );

        Ok(report)
    }

    async fn pack_chunk<I>(&self, payloads: I, report: &mut PackReport) -> Result<()>
    where
        I: Iterator<Item = EventPayload>,
    {
        let mut batch = self.sink.create_batch().await?;

        for payload in payloads {
            let Err(Overflow(payload)) = batch.try_append(payload) else {
                continue;
            };

            if batch.is_empty() {
                return Err(HubError::PayloadTooLarge(payload.len()));
            }

            self.send(batch, report).await?;
            batch = self.sink.create_batch().await?;

            if let Err(Overflow(payload)) = batch.try_append(payload) {
                return Err(HubError::PayloadTooLarge(payload.len()));
            }
        }

        if !batch.is_empty() {
            self.send(batch, report).await?;
        }

        Ok(())
    }

    async fn send(&self, batch: S::Batch, report: &mut PackReport) -> Result<()> {
        let events = batch.len();

        self.sink.send_batch(batch, self.partition_key).await?;

        report.batches += 1;
        report.events += events;
        debug!(events, batch = report.batches, "Sent batch");

        Ok(())
    }
}
