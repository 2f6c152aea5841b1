use super::partition_id_for;
use crate::errors::{BoxError, HubError, Result, TransportError};
use crate::payload::EventPayload;
use crate::position::StartingPosition;
use crate::traits::{EventSource, ReceivedEvent};
use async_nats::jetstream::consumer::{pull, AckPolicy, DeliverPolicy};
use async_nats::jetstream::{self, stream::Stream};
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use tracing::{debug, instrument};

/// Consumes a hub as a durable consumer group.
pub struct JetStreamSource {
    stream: Stream,
    hub_name: String,
    consumer_group: String,
}

impl JetStreamSource {
    pub fn new(stream: Stream, hub_name: &str, consumer_group: &str) -> Self {
        Self {
            stream,
            hub_name: hub_name.to_owned(),
            consumer_group: consumer_group.to_owned(),
        }
    }
}

#[async_trait]
impl EventSource for JetStreamSource {
    type Event = JetStreamEvent;

    #[instrument(skip(self), fields(hub = %self.hub_name, consumer_group = %self.consumer_group))]
    async fn subscribe(
        &self,
        position: StartingPosition,
    ) -> Result<BoxStream<'_, Result<Self::Event>>> {
        let subscribe_error =
            |err: BoxError| TransportError::Subscribe(self.consumer_group.clone(), err);

        let config = pull::Config {
            name: Some(self.consumer_group.clone()),
            durable_name: Some(self.consumer_group.clone()),
            deliver_policy: deliver_policy(position),
            ack_policy: AckPolicy::Explicit,
            ..Default::default()
        };

        // An existing consumer group keeps its checkpoint and ignores the requested position.
        let consumer = self
            .stream
            .get_or_create_consumer(&self.consumer_group, config)
            .await
            .map_err(|err| subscribe_error(err.into()))?;

        let messages = consumer
            .messages()
            .await
            .map_err(|err| subscribe_error(err.into()))?;

        debug!("Subscribed to hub");

        let hub_name = self.hub_name.as_str();
        let events = messages.map(move |message| match message {
            Ok(message) => Ok(JetStreamEvent::new(message, hub_name)),
            Err(err) => Err(HubError::from(TransportError::Receive(err.into()))),
        });

        Ok(events.boxed())
    }
}

fn deliver_policy(position: StartingPosition) -> DeliverPolicy {
    match position {
        StartingPosition::Earliest => DeliverPolicy::All,
        StartingPosition::Latest => DeliverPolicy::New,
        StartingPosition::Sequence(start_sequence) => {
            DeliverPolicy::ByStartSequence { start_sequence }
        }
        StartingPosition::Timestamp(start_time) => DeliverPolicy::ByStartTime { start_time },
    }
}

/// An event delivered by a [JetStreamSource]. Checkpointing acknowledges the message.
pub struct JetStreamEvent {
    message: jetstream::Message,
    partition_id: String,
    payload: EventPayload,
}

impl JetStreamEvent {
    fn new(message: jetstream::Message, hub_name: &str) -> Self {
        let partition_id = partition_id_for(hub_name, &message.subject.to_string());
        let payload = EventPayload::from(message.payload.clone());

        Self {
            message,
            partition_id,
            payload,
        }
    }
}

#[async_trait]
impl ReceivedEvent for JetStreamEvent {
    fn partition_id(&self) -> &str {
        &self.partition_id
    }

    fn payload(&self) -> &EventPayload {
        &self.payload
    }

    async fn checkpoint(&self) -> Result<()> {
        self.message
            .ack()
            .await
            .map_err(|err| TransportError::Checkpoint(err.into()))?;

        Ok(())
    }
}
