#![allow(dead_code)]

use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use hubcast::traits::{EventBatch, EventSink, EventSource, ReceivedEvent};
use hubcast::{EventPayload, MessageBatch, Result, StartingPosition, TransportError};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentBatch {
    pub payloads: Vec<String>,
    pub size_bytes: usize,
    pub partition_key: Option<String>,
}

/// Sink that records every batch it is asked to send, with a fixed bound on batch size.
pub struct FakeSink {
    max_bytes: usize,
    max_events: Option<usize>,
    fail_sends: bool,
    batches_created: Mutex<usize>,
    sent: Mutex<Vec<SentBatch>>,
}

impl FakeSink {
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            max_events: None,
            fail_sends: false,
            batches_created: Mutex::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_max_events(max_events: usize) -> Self {
        Self {
            max_events: Some(max_events),
            ..Self::with_max_bytes(usize::MAX)
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    pub fn sent(&self) -> Vec<SentBatch> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_payloads(&self) -> Vec<Vec<String>> {
        self.sent().into_iter().map(|batch| batch.payloads).collect()
    }

    pub fn batches_created(&self) -> usize {
        *self.batches_created.lock().unwrap()
    }
}

#[async_trait]
impl EventSink for FakeSink {
    type Batch = MessageBatch;

    async fn create_batch(&self) -> Result<Self::Batch> {
        *self.batches_created.lock().unwrap() += 1;

        let batch = MessageBatch::new(self.max_bytes);
        Ok(match self.max_events {
            Some(max_events) => batch.max_events(max_events),
            None => batch,
        })
    }

    async fn send_batch(&self, batch: Self::Batch, partition_key: Option<&str>) -> Result<()> {
        if self.fail_sends {
            return Err(TransportError::Send(batch.len(), "connection reset".into()).into());
        }

        let size_bytes = batch.size_bytes();
        let payloads = batch
            .into_payloads()
            .iter()
            .map(|payload| payload.as_text().into_owned())
            .collect();

        self.sent.lock().unwrap().push(SentBatch {
            payloads,
            size_bytes,
            partition_key: partition_key.map(str::to_owned),
        });

        Ok(())
    }
}

pub fn payloads(texts: &[&str]) -> Vec<EventPayload> {
    texts.iter().copied().map(EventPayload::from).collect()
}

/// Event handed out by [FakeSource], recording its checkpoint in the source's log.
pub struct FakeEvent {
    partition_id: String,
    payload: EventPayload,
    checkpoints: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ReceivedEvent for FakeEvent {
    fn partition_id(&self) -> &str {
        &self.partition_id
    }

    fn payload(&self) -> &EventPayload {
        &self.payload
    }

    async fn checkpoint(&self) -> Result<()> {
        self.checkpoints
            .lock()
            .unwrap()
            .push(self.payload.as_text().into_owned());
        Ok(())
    }
}

/// Source that delivers a fixed list of events, optionally followed by a receive failure or
/// by an endless wait for more events.
pub struct FakeSource {
    events: Vec<(String, String)>,
    fail_after_events: bool,
    endless: bool,
    checkpoints: Arc<Mutex<Vec<String>>>,
    positions: Mutex<Vec<StartingPosition>>,
}

impl FakeSource {
    pub fn new(events: &[(&str, &str)]) -> Self {
        Self {
            events: events
                .iter()
                .map(|(partition, body)| (partition.to_string(), body.to_string()))
                .collect(),
            fail_after_events: false,
            endless: false,
            checkpoints: Arc::new(Mutex::new(Vec::new())),
            positions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_after_events(mut self) -> Self {
        self.fail_after_events = true;
        self
    }

    pub fn endless(mut self) -> Self {
        self.endless = true;
        self
    }

    pub fn checkpoints(&self) -> Vec<String> {
        self.checkpoints.lock().unwrap().clone()
    }

    pub fn positions(&self) -> Vec<StartingPosition> {
        self.positions.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSource for FakeSource {
    type Event = FakeEvent;

    async fn subscribe(
        &self,
        position: StartingPosition,
    ) -> Result<BoxStream<'_, Result<Self::Event>>> {
        self.positions.lock().unwrap().push(position);

        let mut events: Vec<Result<FakeEvent>> = self
            .events
            .iter()
            .map(|(partition_id, body)| {
                Ok(FakeEvent {
                    partition_id: partition_id.clone(),
                    payload: EventPayload::from(body.as_str()),
                    checkpoints: self.checkpoints.clone(),
                })
            })
            .collect();

        if self.fail_after_events {
            events.push(Err(TransportError::Receive("link detached".into()).into()));
        }

        let events = stream::iter(events);

        if self.endless {
            Ok(events.chain(stream::pending()).boxed())
        } else {
            Ok(events.boxed())
        }
    }
}
