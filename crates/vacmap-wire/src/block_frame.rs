use crate::cursor::Cursor;
use crate::error::WireError;

/// Size of the `type` + `length` prefix in front of every block.
pub const FRAME_HEADER_SIZE: usize = 4;

/// Block type ids as they appear on the wire.
///
/// `vacmap-types` maps these onto the `BlockType` enum.
pub mod block_type {
    pub const CHARGER: u16 = 1;
    pub const IMAGE: u16 = 2;
    pub const PATH: u16 = 3;
    pub const GOTO_PATH: u16 = 4;
    pub const GOTO_PREDICTED_PATH: u16 = 5;
    pub const CURRENTLY_CLEANED_ZONES: u16 = 6;
    pub const GOTO_TARGET: u16 = 7;
    pub const ROBOT_POSITION: u16 = 8;
    pub const NO_GO_AREAS: u16 = 9;
    pub const VIRTUAL_WALLS: u16 = 10;
    pub const BLOCKS: u16 = 11;
    pub const NO_MOP_AREAS: u16 = 12;
    pub const OBSTACLES: u16 = 13;
    pub const IGNORED_OBSTACLES: u16 = 14;
    pub const OBSTACLES_WITH_PHOTO: u16 = 15;
    pub const CARPET_MAP: u16 = 16;
}

/// One type-length-value record from the block stream.
///
/// ```text
/// ┌──────────────────────────────────────────┐
/// │ block_type      (u16 LE)                 │
/// │ declared_length (u16 LE)                 │
/// │ body            [declared_length bytes]  │
/// └──────────────────────────────────────────┘
/// ```
///
/// The body borrows from the input buffer; `body.len()` always equals
/// `declared_length`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockFrame<'a> {
    pub block_type: u16,
    pub declared_length: u16,
    pub body: &'a [u8],
}

impl<'a> BlockFrame<'a> {
    /// Read one frame from the front of `buf`.
    ///
    /// # Returns
    ///
    /// `Some((frame, bytes_consumed))` when a complete frame is present,
    /// or `None` when fewer than [`FRAME_HEADER_SIZE`] bytes remain and
    /// the stream is over.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedBlock`] if the header is readable but the
    /// declared body runs past the end of `buf`.
    pub fn read_from(buf: &'a [u8]) -> Result<Option<(Self, usize)>, WireError> {
        if buf.len() < FRAME_HEADER_SIZE {
            return Ok(None);
        }

        let mut cursor = Cursor::new(buf);
        let block_type = cursor.read_u16_le()?;
        let declared_length = cursor.read_u16_le()?;

        let body = cursor
            .read_bytes(usize::from(declared_length))
            .map_err(|_| WireError::TruncatedBlock {
                block_type,
                declared_length,
                available: cursor.remaining(),
            })?;

        Ok(Some((
            Self {
                block_type,
                declared_length,
                body,
            },
            cursor.position(),
        )))
    }
}
