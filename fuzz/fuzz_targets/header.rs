#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: MapHeader::read_from.
fuzz_target!(|data: &[u8]| {
    let _ = vacmap_wire::MapHeader::read_from(data);
});
