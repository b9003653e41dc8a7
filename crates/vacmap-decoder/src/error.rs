use vacmap_wire::WireError;

/// Errors that abort a whole decode.
///
/// Only buffer-level problems end up here. A truncated block stream, a
/// block payload that is too short for its type and an unknown block type
/// are all absorbed by the decoder and never surface as a `DecodeError`.
///
/// ```text
///   DecodeError
///   ├── InvalidHeader(WireError)  ← buffer shorter than the header minimum
///   ├── DecompressFailed          ← gzip envelope could not be inflated
///   └── DecompressionBomb         ← inflated size passed the configured limit
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The (decompressed) buffer failed header validation.
    #[error("invalid header: {0}")]
    InvalidHeader(WireError),

    /// The buffer starts with the gzip magic but does not inflate.
    #[error("gzip decompression failed: {0}")]
    DecompressFailed(String),

    /// Inflating the envelope produced more than
    /// `DecoderConfig::max_decompressed_size` bytes.
    #[error("decompressed size exceeds limit of {limit} bytes")]
    DecompressionBomb { limit: usize },
}
