use std::num::NonZeroUsize;

/// How the [BatchPacker](super::BatchPacker) groups payloads into batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackingPolicy {
    /// Fill each batch until the hub rejects an append.
    #[default]
    Bounded,
    /// Split the input into chunks of at most this many payloads before packing each chunk.
    FixedCount(NonZeroUsize),
}

impl PackingPolicy {
    pub fn fixed_count(count: NonZeroUsize) -> Self {
        Self::FixedCount(count)
    }

    /// Maximum number of payloads packed together before a chunk boundary forces a new batch.
    pub fn chunk_size(&self) -> Option<usize> {
        match self {
            Self::Bounded => None,
            Self::FixedCount(count) => Some(count.get()),
        }
    }
}

impl From<Option<NonZeroUsize>> for PackingPolicy {
    fn from(batch_size: Option<NonZeroUsize>) -> Self {
        batch_size.map_or(Self::Bounded, Self::FixedCount)
    }
}
