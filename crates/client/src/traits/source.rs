use crate::errors::Result;
use crate::payload::EventPayload;
use crate::position::StartingPosition;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// An event delivered by an [EventSource].
#[async_trait]
pub trait ReceivedEvent: Send {
    fn partition_id(&self) -> &str;

    fn payload(&self) -> &EventPayload;

    /// Records that the consumer group has processed this event, so it is not delivered again.
    async fn checkpoint(&self) -> Result<()>;
}

/// Consuming side of a hub.
#[async_trait]
pub trait EventSource: Send + Sync {
    type Event: ReceivedEvent;

    /// Opens a subscription for the configured consumer group.
    ///
    /// The returned stream is lazy and does not end on its own: it yields events as the hub
    /// delivers them until it is dropped, or until the transport fails.
    async fn subscribe(
        &self,
        position: StartingPosition,
    ) -> Result<BoxStream<'_, Result<Self::Event>>>;
}
