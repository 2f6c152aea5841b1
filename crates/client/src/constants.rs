//! Commonly used constants.

use std::time::Duration;

/// The consumer group used when none is configured.
pub const DEFAULT_CONSUMER_GROUP: &str = "$Default";
/// Path sentinel that designates standard input as the source of event payloads.
pub const STDIN_SENTINEL: &str = "-";
/// Upper bound on the summed payload bytes of a single batch, regardless of what the hub allows.
pub const MAX_BATCH_BYTES: usize = 1024 * 1024;
/// Partition id reported for events published without a partition key.
pub const DEFAULT_PARTITION_ID: &str = "0";
/// Maximum time to wait for the initial connection to the hub.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Client name announced to the hub.
pub const CLIENT_NAME: &str = "hubcast";
