use crate::errors::HubError;
use std::fmt::{self, Display};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Cursor marking where a new subscription begins consuming.
///
/// The position only applies when a consumer group has no checkpoint yet. Once events have
/// been checkpointed, the hub resumes the group from its last checkpoint instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartingPosition {
    /// The oldest event still retained by the hub.
    #[default]
    Earliest,
    /// Only events published after the subscription is opened.
    Latest,
    /// The event with the given sequence number, and everything after it.
    Sequence(u64),
    /// The first event enqueued at or after the given instant.
    Timestamp(OffsetDateTime),
}

impl FromStr for StartingPosition {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.to_ascii_lowercase().as_str() {
            "-1" | "earliest" => return Ok(Self::Earliest),
            "@latest" | "latest" => return Ok(Self::Latest),
            _ => {}
        }

        // Hub sequences start at 1, so 0 names the start of the hub.
        match trimmed.parse::<u64>() {
            Ok(0) => return Ok(Self::Earliest),
            Ok(sequence) => return Ok(Self::Sequence(sequence)),
            Err(_) => {}
        }

        OffsetDateTime::parse(trimmed, &Rfc3339)
            .map(Self::Timestamp)
            .map_err(|_| HubError::InvalidStartingPosition(s.to_owned()))
    }
}

impl Display for StartingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Earliest => write!(f, "-1"),
            Self::Latest => write!(f, "@latest"),
            Self::Sequence(sequence) => write!(f, "{sequence}"),
            Self::Timestamp(instant) => {
                let formatted = instant.format(&Rfc3339).map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
        }
    }
}
