use crate::payload::EventPayload;
use crate::traits::{EventBatch, Overflow};

/// An in-memory batch bounded by the summed size of its payloads, and optionally by the
/// number of payloads it holds.
#[derive(Debug, Clone)]
pub struct MessageBatch {
    batch: Vec<EventPayload>,
    size_bytes: usize,
    max_bytes: usize,
    max_events: Option<usize>,
}

impl MessageBatch {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            batch: Vec::new(),
            size_bytes: 0,
            max_bytes,
            max_events: None,
        }
    }

    pub fn max_events(mut self, max_events: usize) -> Self {
        self.max_events = Some(max_events);
        self
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    pub fn payloads(&self) -> &[EventPayload] {
        &self.batch
    }

    pub fn into_payloads(self) -> Vec<EventPayload> {
        self.batch
    }

    fn exceeds_max_events(&self) -> bool {
        self.max_events
            .is_some_and(|max_events| self.batch.len() >= max_events)
    }

    fn exceeds_max_bytes(&self, payload: &EventPayload) -> bool {
        self.size_bytes + payload.len() > self.max_bytes
    }
}

impl EventBatch for MessageBatch {
    fn try_append(&mut self, payload: EventPayload) -> Result<(), Overflow> {
        if self.exceeds_max_events() || self.exceeds_max_bytes(&payload) {
            return Err(Overflow(payload));
        }

        self.size_bytes += payload.len();
        self.batch.push(payload);

        Ok(())
    }

    fn len(&self) -> usize {
        self.batch.len()
    }
}
