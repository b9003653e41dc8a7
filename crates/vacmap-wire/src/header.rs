use serde::Serialize;

use crate::cursor::Cursor;
use crate::error::WireError;

/// Declared size of the header span.
///
/// The fields actually read stop at byte 24 ([`HEADER_FIELDS_LEN`]); the
/// last four bytes of the span are never interpreted as header data.
pub const HEADER_SIZE: usize = 28;

/// Smallest buffer the decoder accepts.
///
/// Larger than [`HEADER_SIZE`]: firmware maps are never shorter than
/// this, and anything below it is rejected outright.
pub const MIN_BUFFER_SIZE: usize = 48;

/// Offset of the first block header, measured from the buffer start.
///
/// This overlaps the last eight bytes of the header span. Observed
/// firmware output is parsed this way, so it is kept as a
/// compatibility constant.
pub const BLOCK_STREAM_OFFSET: usize = 20;

/// Number of reserved 32-bit words after the index and sequence.
const RESERVED_WORDS: usize = 5;

/// Bytes consumed by `read_from`: index, sequence and the reserved words.
pub const HEADER_FIELDS_LEN: usize = 4 + RESERVED_WORDS * 4;

/// Leading fields of a (decompressed) map buffer.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Offset │ Size    │ Description                  │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ 0x00   │ 2 bytes │ Map index (u16 LE)           │
/// │ 0x02   │ 2 bytes │ Map sequence number (u16 LE) │
/// │ 0x04   │ 20 bytes│ 5 × u32 reserved             │
/// │ 0x18   │ 4 bytes │ declared span, never read    │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MapHeader {
    pub map_index: u16,
    pub map_sequence: u16,
}

impl MapHeader {
    /// Parse the header from the start of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BufferTooShort`] if `buf` is shorter than
    /// [`MIN_BUFFER_SIZE`].
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < MIN_BUFFER_SIZE {
            return Err(WireError::BufferTooShort {
                len: buf.len(),
                min: MIN_BUFFER_SIZE,
            });
        }

        let mut cursor = Cursor::new(buf);
        let map_index = cursor.read_u16_le()?;
        let map_sequence = cursor.read_u16_le()?;
        for _ in 0..RESERVED_WORDS {
            cursor.read_u32_le()?;
        }
        debug_assert_eq!(cursor.position(), HEADER_FIELDS_LEN);

        Ok(Self {
            map_index,
            map_sequence,
        })
    }
}
