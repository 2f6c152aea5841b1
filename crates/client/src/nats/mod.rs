//! Hub transport backed by NATS JetStream.
//!
//! A hub is a JetStream stream named after the hub, capturing the subjects `<hub>` and
//! `<hub>.>`. Events without a partition key are published on `<hub>`, keyed events on
//! `<hub>.<key>`, and a consumer group is a durable pull consumer with explicit acks.

mod connection;
mod sink;
mod source;

pub use connection::*;
pub use sink::*;
pub use source::*;

use crate::constants::DEFAULT_PARTITION_ID;
use crate::errors::{HubError, Result};

/// Subject an event is published on, given its optional partition key.
pub(crate) fn subject_for(hub_name: &str, partition_key: Option<&str>) -> Result<String> {
    match partition_key {
        None => Ok(hub_name.to_owned()),
        Some(key) if is_valid_token(key) => Ok(format!("{hub_name}.{key}")),
        Some(key) => Err(HubError::InvalidPartitionKey(key.to_owned())),
    }
}

/// Partition id of an event delivered on `subject`: the partition key it was published with.
pub(crate) fn partition_id_for(hub_name: &str, subject: &str) -> String {
    subject
        .strip_prefix(hub_name)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|key| !key.is_empty())
        .unwrap_or(DEFAULT_PARTITION_ID)
        .to_owned()
}

fn is_valid_token(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '.' | '*' | '>'))
}
