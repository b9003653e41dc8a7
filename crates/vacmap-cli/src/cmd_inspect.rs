/// Implementation of `vacmap inspect`.
///
/// Opens the envelope, reads the header and walks the block stream,
/// printing one line per block. Block payloads are decoded with the same
/// per-type decoders the library uses, so the summary shows exactly what
/// the decoder would keep.
///
/// # Output format
///
/// ```text
/// Envelope: gzip (1203 → 40511 bytes)
/// Header: map index 0, sequence 17
/// Block @20: ROBOT_POSITION (type 8, 12 bytes) x=1 y=2 angle=90
/// Block @36: IMAGE (type 2, 40028 bytes) 200x200 px, top=0 left=0, 40000 pixel bytes
/// Block @40068: UNKNOWN (type 66, 4 bytes) skipped
/// ---
/// Outcome: complete
/// ```
use std::fs;

use anyhow::{Context, Result};
use vacmap_decoder::{BlockWalker, DecoderConfig, Envelope, WalkItem, envelope};
use vacmap_types::{BlockContent, BlockType};
use vacmap_wire::MapHeader;

use crate::InspectArgs;

/// Run the `vacmap inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the envelope does not
/// inflate, or the buffer is too short for a header.
pub fn run(args: &InspectArgs, config: &DecoderConfig) -> Result<()> {
    let raw =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let buf = envelope::open(&raw, config.max_decompressed_size)
        .with_context(|| format!("cannot open envelope of {}", args.file.display()))?;

    match Envelope::detect(&raw) {
        Envelope::Plain => println!("Envelope: none ({} bytes)", raw.len()),
        Envelope::Gzip => println!("Envelope: gzip ({} → {} bytes)", raw.len(), buf.len()),
    }

    let header = MapHeader::read_from(&buf).context("invalid header")?;
    println!(
        "Header: map index {}, sequence {}",
        header.map_index, header.map_sequence
    );

    let mut outcome = "complete".to_string();
    for item in BlockWalker::new(&buf) {
        match item {
            WalkItem::Block { offset, frame } => {
                let block_type = BlockType::from_wire_id(frame.block_type);
                let content = BlockContent::decode_body(block_type, frame.body);
                println!(
                    "Block @{offset}: {} (type {}, {} bytes) {}",
                    block_type.label(),
                    frame.block_type,
                    frame.declared_length,
                    content.describe()
                );
                if args.show_hex {
                    print_hex(frame.body);
                }
            }
            WalkItem::Truncated {
                offset,
                block_type,
                declared_length,
                available,
            } => {
                outcome = format!(
                    "truncated at offset {offset} (type {block_type} declares {declared_length} bytes, {available} remain)"
                );
            }
        }
    }

    println!("---");
    println!("Outcome: {outcome}");
    Ok(())
}

fn print_hex(body: &[u8]) {
    for (i, chunk) in body.chunks(16).enumerate() {
        let offset = i * 16;
        let hex = chunk
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("           {offset:04x}  {hex:<48}  {ascii}");
    }
}
