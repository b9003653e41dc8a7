use vacmap_wire::block_frame::BlockFrame;
use vacmap_wire::header::BLOCK_STREAM_OFFSET;
use vacmap_wire::WireError;

/// One step of the block walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkItem<'a> {
    /// A complete frame whose type prefix starts at `offset`.
    Block { offset: usize, frame: BlockFrame<'a> },

    /// The frame at `offset` declares more bytes than remain. Always the
    /// last item the walker yields.
    Truncated {
        offset: usize,
        block_type: u16,
        declared_length: u16,
        available: usize,
    },
}

/// Iterator over the type-length-value records of a map buffer.
///
/// Walking starts at [`BLOCK_STREAM_OFFSET`] and continues while at
/// least four bytes remain. The cursor advances by each frame's full
/// declared length, whatever the block decoder makes of the payload, so
/// a skipped or half-read block never shifts the offsets of the next one.
///
/// ```text
///   let mut walker = BlockWalker::new(buf);
///   for item in walker {
///       match item {
///           WalkItem::Block { frame, .. } => { /* dispatch */ }
///           WalkItem::Truncated { .. } => { /* partial result */ }
///       }
///   }
/// ```
pub struct BlockWalker<'a> {
    buf: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> BlockWalker<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::starting_at(buf, BLOCK_STREAM_OFFSET)
    }

    /// Walk from an arbitrary offset. Offsets past the end yield nothing.
    #[must_use]
    pub fn starting_at(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
            done: false,
        }
    }

    /// Offset of the next frame to be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for BlockWalker<'a> {
    type Item = WalkItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.pos;
        match BlockFrame::read_from(&self.buf[offset..]) {
            Ok(Some((frame, consumed))) => {
                self.pos += consumed;
                Some(WalkItem::Block { offset, frame })
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(WireError::TruncatedBlock {
                block_type,
                declared_length,
                available,
            }) => {
                self.done = true;
                Some(WalkItem::Truncated {
                    offset,
                    block_type,
                    declared_length,
                    available,
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, offset, "block walk stopped");
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(buf: &mut Vec<u8>, block_type: u16, body: &[u8]) {
        buf.extend_from_slice(&block_type.to_le_bytes());
        buf.extend_from_slice(&u16::try_from(body.len()).unwrap().to_le_bytes());
        buf.extend_from_slice(body);
    }

    fn stream() -> Vec<u8> {
        vec![0u8; BLOCK_STREAM_OFFSET]
    }

    #[test]
    fn yields_frames_with_offsets() {
        let mut buf = stream();
        frame(&mut buf, 8, &[1; 12]);
        frame(&mut buf, 0x42, &[]);
        frame(&mut buf, 1, &[2; 12]);

        let items: Vec<_> = BlockWalker::new(&buf).collect();
        let offsets: Vec<usize> = items
            .iter()
            .map(|item| match item {
                WalkItem::Block { offset, .. } => *offset,
                WalkItem::Truncated { .. } => panic!("unexpected truncation"),
            })
            .collect();
        assert_eq!(offsets, vec![20, 36, 40]);
    }

    #[test]
    fn zero_length_block_consumes_four_bytes() {
        let mut buf = stream();
        frame(&mut buf, 0x42, &[]);
        let mut walker = BlockWalker::new(&buf);
        assert!(matches!(walker.next(), Some(WalkItem::Block { .. })));
        assert_eq!(walker.position(), BLOCK_STREAM_OFFSET + 4);
        assert!(walker.next().is_none());
    }

    #[test]
    fn truncation_is_last_item() {
        let mut buf = stream();
        frame(&mut buf, 8, &[1; 12]);
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(&500u16.to_le_bytes());
        buf.extend_from_slice(&[0; 10]);

        let items: Vec<_> = BlockWalker::new(&buf).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[1],
            WalkItem::Truncated {
                offset: 36,
                block_type: 2,
                declared_length: 500,
                available: 10,
            }
        );
    }

    #[test]
    fn trailing_partial_header_ends_walk() {
        let mut buf = stream();
        frame(&mut buf, 8, &[]);
        buf.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
        assert_eq!(BlockWalker::new(&buf).count(), 1);
    }

    #[test]
    fn buffer_shorter_than_stream_offset_is_empty() {
        let buf = [0u8; 10];
        assert_eq!(BlockWalker::new(&buf).count(), 0);
    }
}
