//! Optional gzip wrapper around the map buffer.
//!
//! Detection runs before any structural check: a compressed buffer is
//! not comparable to the wire layout until it has been inflated.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error::DecodeError;

/// First two bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Envelope {
    Plain,
    Gzip,
}

impl Envelope {
    #[must_use]
    pub fn detect(raw: &[u8]) -> Self {
        if raw.starts_with(&GZIP_MAGIC) {
            Self::Gzip
        } else {
            Self::Plain
        }
    }
}

/// Return the wire buffer inside `raw`, inflating it if it is gzipped.
///
/// Plain buffers are borrowed unchanged.
///
/// # Errors
///
/// - [`DecodeError::DecompressFailed`] if the gzip stream is corrupt.
/// - [`DecodeError::DecompressionBomb`] if `limit` is set and the
///   inflated data is larger.
pub fn open(raw: &[u8], limit: Option<usize>) -> Result<Cow<'_, [u8]>, DecodeError> {
    match Envelope::detect(raw) {
        Envelope::Plain => Ok(Cow::Borrowed(raw)),
        Envelope::Gzip => inflate(raw, limit).map(Cow::Owned),
    }
}

fn inflate(raw: &[u8], limit: Option<usize>) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    // Concatenated gzip members all belong to the same buffer.
    let mut decoder = MultiGzDecoder::new(raw);

    let read = match limit {
        None => decoder.read_to_end(&mut out),
        // Read one byte past the limit so an exact fit is still accepted.
        Some(limit) => {
            let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
            decoder.take(cap).read_to_end(&mut out)
        }
    };

    if let Err(e) = read {
        tracing::warn!(error = %e, compressed = raw.len(), "gzip envelope failed to inflate");
        return Err(DecodeError::DecompressFailed(e.to_string()));
    }

    if let Some(limit) = limit {
        if out.len() > limit {
            tracing::warn!(limit, "gzip envelope exceeds decompression limit");
            return Err(DecodeError::DecompressionBomb { limit });
        }
    }

    tracing::trace!(compressed = raw.len(), inflated = out.len(), "inflated gzip envelope");
    Ok(out)
}
