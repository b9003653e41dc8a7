#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vacmap_decoder::{DecodeStatus, MapDecoder};

#[derive(Debug, Arbitrary)]
struct FuzzBlock {
    block_type: u16,
    body: Vec<u8>,
    /// Extra length claimed beyond the real body.
    overclaim: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzPayload {
    map_index: u16,
    map_sequence: u16,
    blocks: Vec<FuzzBlock>,
}

// Fuzz target: well-formed headers followed by arbitrary blocks.
//
// Any buffer of 48 bytes or more must decode. If a block overclaims its
// length the status must be Truncated at that block's offset, otherwise
// Complete.
fuzz_target!(|input: FuzzPayload| {
    let mut buf = Vec::new();
    buf.extend_from_slice(&input.map_index.to_le_bytes());
    buf.extend_from_slice(&input.map_sequence.to_le_bytes());
    buf.resize(20, 0);

    let mut truncated_at = None;
    for block in &input.blocks {
        let Ok(len) = u16::try_from(block.body.len()) else {
            return;
        };
        let declared = len.saturating_add(u16::from(block.overclaim));
        let offset = buf.len();
        buf.extend_from_slice(&block.block_type.to_le_bytes());
        buf.extend_from_slice(&declared.to_le_bytes());
        buf.extend_from_slice(&block.body);
        if declared != len {
            truncated_at = Some(offset);
            break;
        }
    }
    if buf.len() < 48 || buf.starts_with(&[0x1f, 0x8b]) {
        return;
    }
    let Ok(decoded) = MapDecoder::decode(&buf) else {
        panic!("buffer of {} bytes rejected", buf.len());
    };
    assert_eq!(decoded.map.header.map_index, input.map_index);
    match (truncated_at, decoded.status) {
        (Some(expected), DecodeStatus::Truncated { offset, .. }) => assert_eq!(offset, expected),
        (None, DecodeStatus::Complete) => {}
        (expected, status) => panic!("expected truncation at {expected:?}, got {status:?}"),
    }
});
