use vacmap_wire::Cursor;

use crate::records::read_counted;

/// Minimum payload length for a block id list.
pub const BLOCK_IDS_MIN_LEN: usize = 4;

/// Decode a BLOCKS payload: a `u32` count followed by that many raw
/// `u32` ids.
///
/// Ids are opaque cleaning-zone identifiers and are not scaled. Only the
/// ids that fit in the payload are returned.
#[must_use]
pub fn decode_block_ids(body: &[u8]) -> Vec<u32> {
    if body.len() < BLOCK_IDS_MIN_LEN {
        tracing::debug!(
            len = body.len(),
            min = BLOCK_IDS_MIN_LEN,
            "block id payload too short"
        );
        return Vec::new();
    }
    read_counted(body, 0, 4, "block ids", Cursor::read_u32_le)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_raw_ids() {
        let body: Vec<u8> = [3u32, 16, 17, 0xFFFF_FFFF]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        assert_eq!(decode_block_ids(&body), vec![16, 17, 0xFFFF_FFFF]);
    }

    #[test]
    fn returns_ids_that_fit() {
        let body: Vec<u8> = [5u32, 1, 2]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        assert_eq!(decode_block_ids(&body), vec![1, 2]);
    }

    #[test]
    fn short_payload_is_empty() {
        assert!(decode_block_ids(&[9]).is_empty());
    }
}
