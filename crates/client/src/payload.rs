use bytes::Bytes;
use std::borrow::Cow;

/// The unit of publication: an immutable, opaque sequence of bytes that is treated as text
/// when written back out to an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventPayload(Bytes);

impl EventPayload {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 view of the payload. Invalid sequences are replaced rather than rejected,
    /// as received events are not guaranteed to have been published by this tool.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl From<Bytes> for EventPayload {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<String> for EventPayload {
    fn from(text: String) -> Self {
        Self(Bytes::from(text))
    }
}

impl From<&str> for EventPayload {
    fn from(text: &str) -> Self {
        Self(Bytes::copy_from_slice(text.as_bytes()))
    }
}
