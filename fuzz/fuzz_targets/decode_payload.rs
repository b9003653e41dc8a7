#![no_main]

use libfuzzer_sys::fuzz_target;
use vacmap_driver::MapNormalizer;

// Fuzz target: full decode + normalize.
//
// Calls `MapDecoder::decode(data)` on arbitrary input bytes and feeds
// any parsed map to the default normalizer.
// Catches bugs in:
// - Gzip envelope detection and inflation
// - Minimum-length header check
// - Block walk offset arithmetic
// - Per-type payload decoding
// - Unit conversion in the normalizer
fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = vacmap_decoder::MapDecoder::decode(data) {
        let _ = vacmap_driver::DefaultNormalizer.normalize(&decoded.map);
    }
});
