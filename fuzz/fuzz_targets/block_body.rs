#![no_main]

use libfuzzer_sys::fuzz_target;
use vacmap_types::{BlockContent, BlockType};

// Fuzz target: per-type payload decoders.
//
// The first two bytes pick the block type, the rest is the payload.
// Catches bugs in:
// - Minimum-length checks
// - Record counts larger than the payload
// - Obstacle stride handling
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let ty = BlockType::from_wire_id(u16::from_le_bytes([data[0], data[1]]));
    let _ = BlockContent::decode_body(ty, &data[2..]);
});
