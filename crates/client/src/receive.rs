use crate::errors::{HubError, Result};
use crate::position::StartingPosition;
use crate::traits::{EventSource, ReceivedEvent};
use futures::StreamExt;
use std::io::Write;
use tracing::{debug, info};

/// Streams events from `source` to `output`, one line per event body, checkpointing each
/// event once its line has been written.
///
/// Without a `max_events` limit this only returns when the subscription fails, so callers
/// should race it against their own cancellation signal. Returns the number of events
/// written.
///
/// # Errors
///
/// Returns any transport error raised while subscribing, receiving or checkpointing, and
/// [HubError::Output] if `output` cannot be written.
pub async fn receive<S, W>(
    source: &S,
    position: StartingPosition,
    max_events: Option<u64>,
    output: &mut W,
) -> Result<u64>
where
    S: EventSource,
    W: Write,
{
    let mut events = source.subscribe(position).await?;
    let mut received = 0;

    info!(%position, "Waiting for events");

    while max_events.is_none_or(|max| received < max) {
        let Some(event) = events.next().await else {
            break;
        };
        let event = event?;

        debug!(
            partition_id = event.partition_id(),
            size = event.payload().len(),
            "Received event"
        );

        writeln!(output, "{}", event.payload().as_text()).map_err(HubError::Output)?;
        output.flush().map_err(HubError::Output)?;

        event.checkpoint().await?;
        received += 1;
    }

    Ok(received)
}
