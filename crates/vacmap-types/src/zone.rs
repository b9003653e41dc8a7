use serde::Serialize;
use vacmap_wire::{Cursor, WireError};

use crate::records::read_counted;
use crate::units::mm_to_units;

/// Bytes per `(x1, y1, x2, y2)` record.
const ZONE_STRIDE: usize = 16;

/// Minimum payload length for a zone list.
pub const ZONE_MIN_LEN: usize = 4;

/// Two corner points in metres.
///
/// Used for no-go areas and no-mop areas (rectangles) as well as
/// virtual walls (line segments from `(x1, y1)` to `(x2, y2)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Zone {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Zone {
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            x1: mm_to_units(cursor.read_u32_le()?),
            y1: mm_to_units(cursor.read_u32_le()?),
            x2: mm_to_units(cursor.read_u32_le()?),
            y2: mm_to_units(cursor.read_u32_le()?),
        })
    }
}

/// Decode a NO_GO_AREAS / VIRTUAL_WALLS / NO_MOP_AREAS payload.
///
/// ```text
///   [0..4)  zone count (u32 LE)
///   [4..)   count × (x1, y1, x2, y2) u32 LE, millimetres
/// ```
#[must_use]
pub fn decode_zones(body: &[u8]) -> Vec<Zone> {
    if body.len() < ZONE_MIN_LEN {
        tracing::debug!(len = body.len(), min = ZONE_MIN_LEN, "zone payload too short");
        return Vec::new();
    }
    read_counted(body, 0, ZONE_STRIDE, "zones", Zone::read)
}
