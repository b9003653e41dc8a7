//! Test support for the vacmap workspace.
//!
//! [`PayloadBuilder`] assembles raw map buffers in the device wire layout
//! so tests and benches can describe a map instead of hand-writing bytes.
//! It exists for testing only; the library crates are decode-only.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use vacmap_wire::block_frame::block_type;
use vacmap_wire::header::{BLOCK_STREAM_OFFSET, MIN_BUFFER_SIZE};

/// Builder for raw map buffers.
///
/// ```text
///   [0..2)    map index
///   [2..4)    map sequence
///   [4..20)   zeros
///   [20..)    frames, in the order they were added
///   ..48      zero padding, only if the buffer would be shorter
/// ```
///
/// Zero padding reads back as zero-length blocks of type 0, which the
/// decoder skips.
#[derive(Clone, Debug, Default)]
pub struct PayloadBuilder {
    map_index: u16,
    map_sequence: u16,
    stream: Vec<u8>,
}

impl PayloadBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&mut self, map_index: u16, map_sequence: u16) -> &mut Self {
        self.map_index = map_index;
        self.map_sequence = map_sequence;
        self
    }

    /// Append a frame with an arbitrary type id and payload.
    ///
    /// # Panics
    ///
    /// Panics if `body` is longer than `u16::MAX`.
    pub fn block(&mut self, block_type: u16, body: &[u8]) -> &mut Self {
        let len = u16::try_from(body.len()).expect("block body longer than u16::MAX");
        self.stream.extend_from_slice(&block_type.to_le_bytes());
        self.stream.extend_from_slice(&len.to_le_bytes());
        self.stream.extend_from_slice(body);
        self
    }

    /// Append a frame header that declares `declared_length` bytes but is
    /// followed only by `body`.
    pub fn truncated_block(&mut self, block_type: u16, declared_length: u16, body: &[u8]) -> &mut Self {
        self.stream.extend_from_slice(&block_type.to_le_bytes());
        self.stream.extend_from_slice(&declared_length.to_le_bytes());
        self.stream.extend_from_slice(body);
        self
    }

    /// Append bytes to the block stream verbatim.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.stream.extend_from_slice(bytes);
        self
    }

    pub fn charger(&mut self, x_mm: u32, y_mm: u32, angle_cdeg: u32) -> &mut Self {
        self.block(block_type::CHARGER, &words(&[x_mm, y_mm, angle_cdeg]))
    }

    pub fn robot_position(&mut self, x_mm: u32, y_mm: u32, angle_cdeg: u32) -> &mut Self {
        self.block(block_type::ROBOT_POSITION, &words(&[x_mm, y_mm, angle_cdeg]))
    }

    pub fn goto_target(&mut self, x_mm: u32, y_mm: u32, angle_cdeg: u32) -> &mut Self {
        self.block(block_type::GOTO_TARGET, &words(&[x_mm, y_mm, angle_cdeg]))
    }

    pub fn image(&mut self, top: u32, left: u32, height: u32, width: u32, pixels: &[u8]) -> &mut Self {
        let mut body = words(&[top, left, height, width, 0, 0, 0]);
        body.extend_from_slice(pixels);
        self.block(block_type::IMAGE, &body)
    }

    pub fn path(&mut self, points: &[(u32, u32)]) -> &mut Self {
        self.block(block_type::PATH, &path_body(points))
    }

    pub fn goto_path(&mut self, points: &[(u32, u32)]) -> &mut Self {
        self.block(block_type::GOTO_PATH, &path_body(points))
    }

    pub fn no_go_areas(&mut self, zones: &[[u32; 4]]) -> &mut Self {
        self.block(block_type::NO_GO_AREAS, &zones_body(zones))
    }

    pub fn virtual_walls(&mut self, walls: &[[u32; 4]]) -> &mut Self {
        self.block(block_type::VIRTUAL_WALLS, &zones_body(walls))
    }

    pub fn block_ids(&mut self, ids: &[u32]) -> &mut Self {
        let mut body = count(ids.len());
        body.extend(words(ids));
        self.block(block_type::BLOCKS, &body)
    }

    pub fn obstacles(&mut self, obstacles: &[(u32, u32, u16)]) -> &mut Self {
        let mut body = count(obstacles.len());
        for &(x, y, ty) in obstacles {
            body.extend(words(&[x, y]));
            body.extend_from_slice(&ty.to_le_bytes());
            body.extend_from_slice(&[0, 0]);
        }
        self.block(block_type::OBSTACLES, &body)
    }

    /// Produce the plain wire buffer.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(BLOCK_STREAM_OFFSET + self.stream.len());
        buf.extend_from_slice(&self.map_index.to_le_bytes());
        buf.extend_from_slice(&self.map_sequence.to_le_bytes());
        buf.resize(BLOCK_STREAM_OFFSET, 0);
        buf.extend_from_slice(&self.stream);
        if buf.len() < MIN_BUFFER_SIZE {
            buf.resize(MIN_BUFFER_SIZE, 0);
        }
        buf
    }

    /// Produce the buffer wrapped in a gzip envelope.
    #[must_use]
    pub fn build_gzip(&self) -> Vec<u8> {
        gzip(&self.build())
    }
}

/// Little-endian bytes of each `u32` in order.
#[must_use]
pub fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Wrap `data` in a gzip stream.
///
/// # Panics
///
/// Panics if the in-memory encoder fails, which it does not.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("in-memory gzip write");
    encoder.finish().expect("in-memory gzip finish")
}

fn count(n: usize) -> Vec<u8> {
    u32::try_from(n).expect("record count fits in u32").to_le_bytes().to_vec()
}

fn path_body(points: &[(u32, u32)]) -> Vec<u8> {
    let mut body = vec![0u8; 12];
    body.extend(count(points.len()));
    for &(x, y) in points {
        body.extend(words(&[x, y]));
    }
    body
}

fn zones_body(zones: &[[u32; 4]]) -> Vec<u8> {
    let mut body = count(zones.len());
    for zone in zones {
        body.extend(words(zone));
    }
    body
}
