use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

pub type Result<T, E = HubError> = std::result::Result<T, E>;

/// Boxed error returned by the underlying hub client library.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input from {}.", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input from {} is not valid UTF-8 text.", .path.display())]
    UnsupportedEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to connect to the hub.")]
    Connect(#[source] BoxError),

    #[error("Failed to open hub '{0}'.")]
    OpenHub(String, #[source] BoxError),

    #[error("Failed to send batch of {0} events.")]
    Send(usize, #[source] BoxError),

    #[error("Failed to subscribe as consumer group '{0}'.")]
    Subscribe(String, #[source] BoxError),

    #[error("Failed to receive event.")]
    Receive(#[source] BoxError),

    #[error("Failed to checkpoint event.")]
    Checkpoint(#[source] BoxError),
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Payload size ({0} bytes) does not fit in an empty batch.")]
    PayloadTooLarge(usize),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid starting position '{0}': expected -1, @latest, a sequence number or an RFC 3339 timestamp.")]
    InvalidStartingPosition(String),

    #[error("Invalid partition key '{0}': keys must be non-empty and cannot contain whitespace, '.', '*' or '>'.")]
    InvalidPartitionKey(String),

    #[error("Failed to write event to output.")]
    Output(#[source] std::io::Error),
}
