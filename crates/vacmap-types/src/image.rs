use serde::Serialize;
use vacmap_wire::{Cursor, WireError};

/// Number of `u32` fields in front of the pixel data.
const HEADER_WORDS: usize = 7;

/// IMAGE block — the floor-plan raster.
///
/// ```text
/// ┌────────┬──────┬──────────────────────────────┐
/// │ Offset │ Size │ Field                        │
/// ├────────┼──────┼──────────────────────────────┤
/// │ 0      │ 4    │ top    (u32 LE, mm)          │
/// │ 4      │ 4    │ left   (u32 LE, mm)          │
/// │ 8      │ 4    │ height (u32 LE, pixels)      │
/// │ 12     │ 4    │ width  (u32 LE, pixels)      │
/// │ 16     │ 12   │ 3 × u32, not interpreted     │
/// │ 28     │ ..   │ pixels, one byte per pixel   │
/// └────────┴──────┴──────────────────────────────┘
/// ```
///
/// `top` and `left` stay in wire millimetres here; the normalizer turns
/// them into the map origin. Pixel values are passed through opaquely and
/// the pixel count is not checked against `width * height`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MapImage {
    pub top: u32,
    pub left: u32,
    pub height: u32,
    pub width: u32,
    pub pixels: Vec<u8>,
}

impl MapImage {
    /// Minimum payload length for an image block.
    pub const MIN_LEN: usize = HEADER_WORDS * 4;

    #[must_use]
    pub fn decode_body(body: &[u8]) -> Option<Self> {
        if body.len() < Self::MIN_LEN {
            tracing::debug!(len = body.len(), min = Self::MIN_LEN, "image payload too short");
            return None;
        }
        Self::read(&mut Cursor::new(body)).ok()
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        let top = cursor.read_u32_le()?;
        let left = cursor.read_u32_le()?;
        let height = cursor.read_u32_le()?;
        let width = cursor.read_u32_le()?;
        cursor.skip((HEADER_WORDS - 4) * 4)?;

        Ok(Self {
            top,
            left,
            height,
            width,
            pixels: cursor.rest().to_vec(),
        })
    }
}
