//! Resolution of event payloads from operator input.
//!
//! Payloads come from exactly one source, picked in priority order: explicit values supplied
//! on the command line, then a file, then standard input. File and stdin content is read in
//! full and split into one payload per line.

use crate::constants::STDIN_SENTINEL;
use crate::errors::InputError;
use crate::payload::EventPayload;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

type Result<T, E = InputError> = std::result::Result<T, E>;

/// Where a sequence of event payloads is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Explicit payloads, used verbatim.
    Values(Vec<String>),
    /// A file whose lines become payloads.
    File(PathBuf),
    /// Standard input, split into lines.
    Stdin,
}

impl InputSource {
    /// Picks the source for a batch of payloads.
    ///
    /// Non-empty `values` always win. Otherwise `path` designates a file, unless it is absent
    /// or equal to the `-` sentinel, in which case standard input is used.
    pub fn resolve(values: Vec<String>, path: Option<PathBuf>) -> Self {
        if !values.is_empty() {
            return Self::Values(values);
        }

        match path {
            Some(path) if path.as_os_str() != STDIN_SENTINEL => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Reads the payloads, taking standard input from the current process.
    pub fn read_payloads(self) -> Result<Vec<EventPayload>> {
        self.read_payloads_from(std::io::stdin())
    }

    /// Reads the payloads, taking standard input from `stdin`.
    ///
    /// # Errors
    ///
    /// Returns [InputError::InputUnavailable] if the file or stream cannot be read, and
    /// [InputError::UnsupportedEncoding] if its content is not valid UTF-8.
    pub fn read_payloads_from<R: Read>(self, stdin: R) -> Result<Vec<EventPayload>> {
        let payloads = match self {
            Self::Values(values) => values.into_iter().map(EventPayload::from).collect(),
            Self::File(path) => {
                let bytes =
                    std::fs::read(&path).map_err(|source| InputError::InputUnavailable {
                        path: path.clone(),
                        source,
                    })?;
                split_lines(&decode(bytes, &path)?)
            }
            Self::Stdin => split_lines(&read_to_string(stdin)?),
        };

        debug!(count = payloads.len(), "Resolved event payloads");

        Ok(payloads)
    }
}

/// Reads the payload of a single event: the literal `text` when given, otherwise the whole of
/// `stdin` with one trailing line terminator removed.
pub fn read_single<R: Read>(text: Option<String>, stdin: R) -> Result<EventPayload> {
    if let Some(text) = text {
        return Ok(EventPayload::from(text));
    }

    let mut content = read_to_string(stdin)?;

    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }

    Ok(EventPayload::from(content))
}

/// Splits text into one payload per line. Both `\n` and `\r\n` end a line, a final terminator
/// does not yield a trailing empty payload, and interior empty lines are kept.
pub fn split_lines(content: &str) -> Vec<EventPayload> {
    content.lines().map(EventPayload::from).collect()
}

fn read_to_string<R: Read>(mut stdin: R) -> Result<String> {
    let path = Path::new(STDIN_SENTINEL);
    let mut bytes = Vec::new();

    stdin
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::InputUnavailable {
            path: path.to_owned(),
            source,
        })?;

    decode(bytes, path)
}

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| InputError::UnsupportedEncoding {
        path: path.to_owned(),
        source,
    })
}
