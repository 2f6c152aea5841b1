use crate::errors::Result;
use crate::payload::EventPayload;
use async_trait::async_trait;

/// Signal returned when a payload does not fit in a batch. The rejected payload is handed
/// back so the caller can retry it against a fresh batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overflow(pub EventPayload);

/// A size-bounded, ordered group of payloads that is sent in one operation.
///
/// The bound is opaque to callers: it is only discovered when [EventBatch::try_append]
/// returns an [Overflow].
pub trait EventBatch: Send {
    fn try_append(&mut self, payload: EventPayload) -> Result<(), Overflow>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Publishing side of a hub.
#[async_trait]
pub trait EventSink: Send + Sync {
    type Batch: EventBatch;

    /// Creates an empty batch sized to what the hub accepts in one send.
    async fn create_batch(&self) -> Result<Self::Batch>;

    /// Sends every payload of `batch`, routed by `partition_key` when one is given.
    ///
    /// A send is not idempotent and is never retried here.
    async fn send_batch(&self, batch: Self::Batch, partition_key: Option<&str>) -> Result<()>;
}
