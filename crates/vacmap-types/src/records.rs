use vacmap_wire::{Cursor, WireError};

/// Read a `u32` record count at `count_at`, then up to that many
/// fixed-stride records that follow it.
///
/// A record is only handed to `parse` once all `stride` bytes are
/// present. Records that do not fit are dropped and the ones read so
/// far are returned.
pub(crate) fn read_counted<'a, T>(
    body: &'a [u8],
    count_at: usize,
    stride: usize,
    what: &'static str,
    mut parse: impl FnMut(&mut Cursor<'a>) -> Result<T, WireError>,
) -> Vec<T> {
    let mut cursor = Cursor::at(body, count_at);
    let Ok(count) = cursor.read_u32_le() else {
        tracing::debug!(len = body.len(), what, "payload too short for record count");
        return Vec::new();
    };

    let declared = usize::try_from(count).unwrap_or(usize::MAX);
    let mut out = Vec::with_capacity(declared.min(cursor.remaining() / stride));

    for _ in 0..count {
        let Ok(record) = cursor.read_bytes(stride) else {
            break;
        };
        match parse(&mut Cursor::new(record)) {
            Ok(value) => out.push(value),
            Err(_) => break,
        }
    }

    if out.len() < declared {
        tracing::debug!(
            declared,
            decoded = out.len(),
            what,
            "record list cut short by payload length"
        );
    }
    out
}
