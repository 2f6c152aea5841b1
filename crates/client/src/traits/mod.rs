//! Traits describing the hub transport as seen by the batching and receiving logic.

mod sink;
mod source;

pub use sink::*;
pub use source::*;
