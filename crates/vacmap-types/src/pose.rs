use serde::Serialize;
use vacmap_wire::{Cursor, WireError};

use crate::units::{centidegrees_to_degrees, mm_to_units};

/// A position plus heading, in metres and degrees.
///
/// Charger, robot and goto-target blocks all share this layout:
///
/// ```text
/// ┌────────┬──────┬────────────────────────┐
/// │ Offset │ Size │ Field                  │
/// ├────────┼──────┼────────────────────────┤
/// │ 0      │ 4    │ x     (u32 LE, mm)     │
/// │ 4      │ 4    │ y     (u32 LE, mm)     │
/// │ 8      │ 4    │ angle (u32 LE, 1/100°) │
/// └────────┴──────┴────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Pose {
    /// Minimum payload length for a pose block.
    pub const MIN_LEN: usize = 12;

    /// Decode a pose payload. Returns `None` if it is shorter than
    /// [`Pose::MIN_LEN`]; trailing bytes are ignored.
    #[must_use]
    pub fn decode_body(body: &[u8]) -> Option<Self> {
        if body.len() < Self::MIN_LEN {
            tracing::debug!(len = body.len(), min = Self::MIN_LEN, "pose payload too short");
            return None;
        }
        Self::read(&mut Cursor::new(body)).ok()
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            x: mm_to_units(cursor.read_u32_le()?),
            y: mm_to_units(cursor.read_u32_le()?),
            angle: centidegrees_to_degrees(cursor.read_u32_le()?),
        })
    }
}
