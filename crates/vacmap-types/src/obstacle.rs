use serde::Serialize;
use vacmap_wire::{Cursor, WireError};

use crate::records::read_counted;
use crate::units::mm_to_units;

/// Record stride on the wire. Only the first 10 bytes carry fields.
const OBSTACLE_STRIDE: usize = 12;

/// Minimum payload length for an obstacle list.
pub const OBSTACLES_MIN_LEN: usize = 4;

/// An object detected on the floor.
///
/// ```text
/// ┌────────┬──────┬───────────────────────┐
/// │ Offset │ Size │ Field                 │
/// ├────────┼──────┼───────────────────────┤
/// │ 0      │ 4    │ x    (u32 LE, mm)     │
/// │ 4      │ 4    │ y    (u32 LE, mm)     │
/// │ 8      │ 2    │ type (u16 LE)         │
/// │ 10     │ 2    │ not interpreted       │
/// └────────┴──────┴───────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub obstacle_type: u16,
}

impl Obstacle {
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            x: mm_to_units(cursor.read_u32_le()?),
            y: mm_to_units(cursor.read_u32_le()?),
            obstacle_type: cursor.read_u16_le()?,
        })
    }
}

/// Decode an OBSTACLES payload: a `u32` count followed by 12-byte
/// records. A record is only decoded when all 12 bytes are present.
#[must_use]
pub fn decode_obstacles(body: &[u8]) -> Vec<Obstacle> {
    if body.len() < OBSTACLES_MIN_LEN {
        tracing::debug!(
            len = body.len(),
            min = OBSTACLES_MIN_LEN,
            "obstacle payload too short"
        );
        return Vec::new();
    }
    read_counted(body, 0, OBSTACLE_STRIDE, "obstacles", Obstacle::read)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: u32, y: u32, ty: u16) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
        buf.extend_from_slice(&ty.to_le_bytes());
        buf.extend_from_slice(&[0xFF, 0xFF]);
        buf
    }

    #[test]
    fn decodes_with_twelve_byte_stride() {
        let mut body = 2u32.to_le_bytes().to_vec();
        body.extend(record(1000, 2000, 3));
        body.extend(record(500, 250, 42));

        let obstacles = decode_obstacles(&body);
        assert_eq!(
            obstacles,
            vec![
                Obstacle {
                    x: 1.0,
                    y: 2.0,
                    obstacle_type: 3
                },
                Obstacle {
                    x: 0.5,
                    y: 0.25,
                    obstacle_type: 42
                },
            ]
        );
    }

    #[test]
    fn ten_byte_tail_is_not_a_record() {
        let mut body = 2u32.to_le_bytes().to_vec();
        body.extend(record(1000, 1000, 1));
        body.extend_from_slice(&record(2000, 2000, 2)[..10]);
        assert_eq!(decode_obstacles(&body).len(), 1);
    }

    #[test]
    fn short_payload_is_empty() {
        assert!(decode_obstacles(&[]).is_empty());
    }
}
