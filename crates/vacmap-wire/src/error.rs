/// Errors raised while reading the raw map wire format.
///
/// Only [`WireError::BufferTooShort`] is fatal to a whole decode. The
/// other variants describe a single refused read: the block walker turns
/// [`WireError::TruncatedBlock`] into a partial result, and field decoders
/// turn [`WireError::UnexpectedEof`] into an absent field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The whole buffer is smaller than the minimum the header needs.
    #[error("buffer too short: {len} bytes, need at least {min}")]
    BufferTooShort { len: usize, min: usize },

    /// A read of `needed` bytes at `offset` would run past the end.
    #[error("unexpected end of input: {needed} bytes at offset {offset} overruns {len}-byte buffer")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// A block header declares more payload than the buffer holds.
    #[error("block type {block_type} declares {declared_length} bytes but only {available} remain")]
    TruncatedBlock {
        block_type: u16,
        declared_length: u16,
        available: usize,
    },
}
