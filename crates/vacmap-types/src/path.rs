use serde::Serialize;
use vacmap_wire::{Cursor, WireError};

use crate::records::read_counted;
use crate::units::mm_to_units;

/// Offset of the `u32` point count inside a path payload.
const COUNT_OFFSET: usize = 12;

/// Bytes per `(x, y)` point record.
const POINT_STRIDE: usize = 8;

/// A single path vertex in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            x: mm_to_units(cursor.read_u32_le()?),
            y: mm_to_units(cursor.read_u32_le()?),
        })
    }
}

/// Minimum payload length for any path block.
pub const PATH_MIN_LEN: usize = COUNT_OFFSET + 4;

/// Decode a PATH / GOTO_PATH / GOTO_PREDICTED_PATH payload.
///
/// ```text
///   [0..12)   not interpreted
///   [12..16)  point count (u32 LE)
///   [16..)    count × (x u32, y u32), millimetres
/// ```
///
/// Returns the points that fit when the payload is shorter than the
/// count implies, and an empty list when it is shorter than
/// [`PATH_MIN_LEN`].
#[must_use]
pub fn decode_path(body: &[u8]) -> Vec<Point> {
    if body.len() < PATH_MIN_LEN {
        tracing::debug!(len = body.len(), min = PATH_MIN_LEN, "path payload too short");
        return Vec::new();
    }
    read_counted(body, COUNT_OFFSET, POINT_STRIDE, "path", Point::read)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(count: u32, points: &[(u32, u32)]) -> Vec<u8> {
        let mut buf = vec![0xAB; COUNT_OFFSET];
        buf.extend_from_slice(&count.to_le_bytes());
        for &(x, y) in points {
            buf.extend_from_slice(&x.to_le_bytes());
            buf.extend_from_slice(&y.to_le_bytes());
        }
        buf
    }

    #[test]
    fn decodes_points_in_order() {
        let points = decode_path(&body(2, &[(1000, 500), (2500, 0)]));
        assert_eq!(
            points,
            vec![Point { x: 1.0, y: 0.5 }, Point { x: 2.5, y: 0.0 }]
        );
    }

    #[test]
    fn stops_early_when_payload_runs_out() {
        let mut bytes = body(3, &[(1000, 1000), (2000, 2000)]);
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        let points = decode_path(&bytes);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point { x: 2.0, y: 2.0 });
    }

    #[test]
    fn extra_points_beyond_count_are_ignored() {
        let points = decode_path(&body(1, &[(1000, 1000), (2000, 2000)]));
        assert_eq!(points, vec![Point { x: 1.0, y: 1.0 }]);
    }

    #[test]
    fn short_payload_is_empty() {
        assert!(decode_path(&[0; PATH_MIN_LEN - 1]).is_empty());
        assert!(decode_path(&body(0, &[])).is_empty());
    }
}
