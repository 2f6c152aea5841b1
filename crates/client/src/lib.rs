//! Client library for publishing events to, and receiving events from, a managed event hub.
//!
//! Publishing packs payloads into size-bounded batches with a [BatchPacker], sending each batch
//! as soon as it is full. Receiving streams events from a consumer group and checkpoints each
//! one after it has been handled.
//!
//! The packing and receiving logic only depends on the [EventSink](traits::EventSink) and
//! [EventSource](traits::EventSource) traits. [HubConnection] provides implementations of both
//! backed by NATS JetStream.
//!
//! # Examples
//! ```no_run
//! use hubcast::{BatchPacker, HubConfig, HubConnection, InputSource, PackingPolicy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), hubcast::HubError> {
//!     let config = HubConfig::new("nats://localhost:4222", "telemetry");
//!     let connection = HubConnection::connect(&config).await?;
//!     let sink = connection.sink().await?;
//!
//!     let payloads = InputSource::Values(vec!["a".into(), "b".into()]).read_payloads()?;
//!     let report = BatchPacker::new(&sink, PackingPolicy::Bounded)
//!         .pack(payloads)
//!         .await?;
//!
//!     eprintln!("sent {} events in {} batches", report.events, report.batches);
//!     Ok(())
//! }
//! ```

mod config;
mod errors;
mod payload;
mod position;
mod receive;

pub mod batching;
pub mod constants;
pub mod input;
pub mod nats;
pub mod traits;

pub use batching::{BatchPacker, MessageBatch, PackReport, PackingPolicy};
pub use config::HubConfig;
pub use errors::*;
pub use input::InputSource;
pub use nats::HubConnection;
pub use payload::EventPayload;
pub use position::StartingPosition;
pub use receive::receive;
