use vacmap_types::{BlockContent, BlockType, ParsedMap};
use vacmap_wire::MapHeader;

use crate::config::DecoderConfig;
use crate::envelope;
use crate::error::DecodeError;
use crate::walker::{BlockWalker, WalkItem};

/// How far the block walk got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The walk reached the end of the buffer.
    Complete,

    /// A block at `offset` declared more payload than remained. Every
    /// block before it was decoded.
    Truncated {
        offset: usize,
        block_type: u16,
        declared_length: u16,
        available: usize,
    },
}

/// The result of decoding one map buffer.
///
/// ```text
/// ┌────────────────────────────────────────────────────┐
/// │ DecodedMap                                         │
/// │   map:    ParsedMap     ← header + decoded fields  │
/// │   status: DecodeStatus  ← Complete | Truncated     │
/// └────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedMap {
    pub map: ParsedMap,
    pub status: DecodeStatus,
}

impl DecodedMap {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == DecodeStatus::Complete
    }
}

/// Synchronous map decoder.
///
/// Decoding is a single pass over an in-memory buffer:
///
///   1. **Envelope**: if the buffer starts with the gzip magic, inflate
///      it. Failure aborts the decode.
///   2. **Header**: require at least 48 bytes and read the map index and
///      sequence number.
///   3. **Blocks**: walk the type-length-value stream from offset 20,
///      decoding each known block type into its `ParsedMap` field.
///      Unknown types are skipped and short payloads leave their field
///      empty.
///   4. **Termination**: the walk ends at the buffer end
///      ([`DecodeStatus::Complete`]) or at the first block that overruns
///      it ([`DecodeStatus::Truncated`]).
///
/// The decoder keeps no state between calls and never holds on to the
/// input, so independent buffers can be decoded concurrently.
///
/// # Example
///
/// ```rust
/// use vacmap_decoder::MapDecoder;
///
/// let mut buf = vec![0u8; 48];
/// buf[20..22].copy_from_slice(&8u16.to_le_bytes());
/// buf[22..24].copy_from_slice(&12u16.to_le_bytes());
/// buf[24..28].copy_from_slice(&1000u32.to_le_bytes());
/// buf[28..32].copy_from_slice(&2000u32.to_le_bytes());
/// buf[32..36].copy_from_slice(&9000u32.to_le_bytes());
///
/// let decoded = MapDecoder::decode(&buf).unwrap();
/// let robot = decoded.map.robot_position.unwrap();
/// assert_eq!((robot.x, robot.y, robot.angle), (1.0, 2.0, 90.0));
/// ```
pub struct MapDecoder;

impl MapDecoder {
    /// Decode with the default [`DecoderConfig`] (no inflate limit).
    ///
    /// # Errors
    ///
    /// - [`DecodeError::DecompressFailed`] if a gzip envelope is corrupt.
    /// - [`DecodeError::InvalidHeader`] if the buffer is too short.
    pub fn decode(raw: &[u8]) -> Result<DecodedMap, DecodeError> {
        Self::decode_with_config(raw, &DecoderConfig::default())
    }

    /// Decode with an explicit caller policy.
    ///
    /// # Errors
    ///
    /// All errors from [`decode`](Self::decode), plus
    /// [`DecodeError::DecompressionBomb`] when the envelope inflates past
    /// `config.max_decompressed_size`.
    pub fn decode_with_config(
        raw: &[u8],
        config: &DecoderConfig,
    ) -> Result<DecodedMap, DecodeError> {
        let buf = envelope::open(raw, config.max_decompressed_size)?;

        let header = MapHeader::read_from(&buf).map_err(|e| {
            tracing::debug!(error = %e, "rejecting map buffer");
            DecodeError::InvalidHeader(e)
        })?;

        let mut map = ParsedMap::new(header);
        let mut status = DecodeStatus::Complete;

        for item in BlockWalker::new(&buf) {
            match item {
                WalkItem::Block { offset, frame } => {
                    let block_type = BlockType::from_wire_id(frame.block_type);
                    tracing::trace!(
                        offset,
                        block_type = block_type.label(),
                        len = frame.declared_length,
                        "block"
                    );
                    if !block_type.is_decoded() {
                        tracing::debug!(
                            offset,
                            type_id = frame.block_type,
                            len = frame.declared_length,
                            "skipping block without decoder"
                        );
                        continue;
                    }
                    map.apply(BlockContent::decode_body(block_type, frame.body));
                }
                WalkItem::Truncated {
                    offset,
                    block_type,
                    declared_length,
                    available,
                } => {
                    tracing::debug!(
                        offset,
                        type_id = block_type,
                        declared_length,
                        available,
                        "block overruns buffer, returning partial map"
                    );
                    status = DecodeStatus::Truncated {
                        offset,
                        block_type,
                        declared_length,
                        available,
                    };
                }
            }
        }

        Ok(DecodedMap { map, status })
    }
}

#[cfg(test)]
mod tests {
    use vacmap_types::{Pose, Zone};
    use vacmap_wire::block_frame::block_type;
    use vacmap_wire::header::{BLOCK_STREAM_OFFSET, MIN_BUFFER_SIZE};
    use vacmap_wire::WireError;

    use super::*;

    fn words(values: &[u32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    /// Header-sized zero prefix followed by the given frames, padded to
    /// the minimum buffer size.
    fn buffer(frames: &[(u16, Vec<u8>)]) -> Vec<u8> {
        let mut buf = vec![0u8; BLOCK_STREAM_OFFSET];
        for (ty, body) in frames {
            buf.extend_from_slice(&ty.to_le_bytes());
            buf.extend_from_slice(&u16::try_from(body.len()).unwrap().to_le_bytes());
            buf.extend_from_slice(body);
        }
        if buf.len() < MIN_BUFFER_SIZE {
            buf.resize(MIN_BUFFER_SIZE, 0);
        }
        buf
    }

    #[test]
    fn decodes_robot_position_at_stream_start() {
        let buf = buffer(&[(block_type::ROBOT_POSITION, words(&[1000, 2000, 9000]))]);
        let decoded = MapDecoder::decode(&buf).unwrap();
        assert_eq!(
            decoded.map.robot_position,
            Some(Pose {
                x: 1.0,
                y: 2.0,
                angle: 90.0
            })
        );
        assert!(decoded.is_complete());
    }

    #[test]
    fn header_fields_are_exposed() {
        let mut buf = buffer(&[]);
        buf[0..2].copy_from_slice(&3u16.to_le_bytes());
        buf[2..4].copy_from_slice(&41u16.to_le_bytes());
        let decoded = MapDecoder::decode(&buf).unwrap();
        assert_eq!(decoded.map.header.map_index, 3);
        assert_eq!(decoded.map.header.map_sequence, 41);
    }

    #[test]
    fn short_buffer_is_invalid() {
        let err = MapDecoder::decode(&[0u8; 47]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidHeader(WireError::BufferTooShort { len: 47, min: 48 })
        ));
        assert!(err.to_string().contains("buffer too short"));
    }

    #[test]
    fn truncated_block_keeps_earlier_fields() {
        let mut buf = buffer(&[
            (block_type::CHARGER, words(&[500, 500, 0])),
            (block_type::NO_GO_AREAS, words(&[1, 0, 0, 5000, 3000])),
        ]);
        buf.extend_from_slice(&block_type::IMAGE.to_le_bytes());
        buf.extend_from_slice(&u16::MAX.to_le_bytes());
        buf.extend_from_slice(&[0; 8]);

        let decoded = MapDecoder::decode(&buf).unwrap();
        assert!(decoded.map.charger_position.is_some());
        assert_eq!(
            decoded.map.no_go_areas,
            vec![Zone {
                x1: 0.0,
                y1: 0.0,
                x2: 5.0,
                y2: 3.0
            }]
        );
        assert!(decoded.map.image.is_none());
        assert!(matches!(
            decoded.status,
            DecodeStatus::Truncated {
                block_type: 2,
                declared_length: u16::MAX,
                available: 8,
                ..
            }
        ));
    }

    #[test]
    fn short_field_does_not_affect_siblings() {
        let buf = buffer(&[
            (block_type::CHARGER, vec![1, 2, 3]),
            (block_type::ROBOT_POSITION, words(&[0, 0, 18000])),
        ]);
        let decoded = MapDecoder::decode(&buf).unwrap();
        assert!(decoded.map.charger_position.is_none());
        assert_eq!(decoded.map.robot_position.unwrap().angle, 180.0);
    }

    #[test]
    fn limit_applies_only_to_gzip() {
        let buf = buffer(&[]);
        let config = DecoderConfig::with_limit(1);
        assert!(MapDecoder::decode_with_config(&buf, &config).is_ok());
    }
}
