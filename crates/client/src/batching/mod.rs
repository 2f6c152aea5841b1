//! Data structures and utilities to pack event payloads into size-bounded batches.
//!
//! Sending events one at a time costs a network round trip per event. Batching groups as many
//! payloads as the hub accepts into a single send.
//!
//! # Packing Algorithm
//!
//! The [BatchPacker] makes a single, greedy pass over its input. It does not know the total
//! input size, nor the size limit of a batch: the limit is only discovered when a
//! [EventBatch](crate::traits::EventBatch) rejects an append with an
//! [Overflow](crate::traits::Overflow).
//!
//! 1. A fresh, empty batch is requested from the [EventSink](crate::traits::EventSink).
//! 2. Each payload is appended in input order. When an append overflows a non-empty batch, that
//!    batch is sent, a new batch is created and the same payload is retried exactly once.
//! 3. Once the input is exhausted, the current batch is sent unless it is empty.
//!
//! A payload that does not fit in an empty batch can never be sent, and is reported as
//! [HubError::PayloadTooLarge](crate::HubError::PayloadTooLarge).
//!
//! Payload order within and across batches always matches input order.
//!
//! ## Packing Policies
//!
//! With [PackingPolicy::Bounded] the packer fills batches until the hub rejects an append.
//! With [PackingPolicy::FixedCount] the input is first split into chunks of at most the given
//! number of payloads, and each chunk is then packed as above, so a chunk still overflows into
//! an extra batch if it exceeds the hub's byte limit.

mod message_batch;
mod packer;
mod packing_policy;

pub use message_batch::*;
pub use packer::*;
pub use packing_policy::*;
