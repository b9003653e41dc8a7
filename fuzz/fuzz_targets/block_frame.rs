#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: BlockFrame::read_from and the walker built on it.
//
// Catches bugs in:
// - Declared lengths past the buffer end
// - Short trailing frame headers
// - Offset advance after each frame
fuzz_target!(|data: &[u8]| {
    let _ = vacmap_wire::BlockFrame::read_from(data);
    for _ in vacmap_decoder::BlockWalker::starting_at(data, 0) {}
});
