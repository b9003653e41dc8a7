/// Implementation of `vacmap validate`.
///
/// Runs a full decode and prints a short report. A truncated block
/// stream is reported with a warning mark but still counts as valid: the
/// decoder returns everything before the bad block.
///
/// # Output
///
/// ```text
/// ✓ Header: map index 0, sequence 17
/// ✓ Image: 200x200 px
/// ✓ Robot: present
/// ! Stream: truncated at offset 4096
/// ```
///
/// On failure a single `✗` line is printed and the command exits 1.
use std::fs;

use anyhow::{Context, Result, anyhow};
use vacmap_decoder::{DecodeError, DecodeStatus, DecoderConfig, MapDecoder};

use crate::ValidateArgs;

/// Run the `vacmap validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the buffer cannot be
/// decoded at all.
pub fn run(args: &ValidateArgs, config: &DecoderConfig) -> Result<()> {
    let raw =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let decoded = match MapDecoder::decode_with_config(&raw, config) {
        Ok(decoded) => decoded,
        Err(e) => {
            println!("✗ Error: {}", diagnostic(&e));
            return Err(anyhow!("validation failed"));
        }
    };

    let map = &decoded.map;
    println!(
        "✓ Header: map index {}, sequence {}",
        map.header.map_index, map.header.map_sequence
    );
    match &map.image {
        Some(image) => println!("✓ Image: {}x{} px", image.width, image.height),
        None => println!("! Image: absent"),
    }
    report("Robot", map.robot_position.is_some());
    report("Charger", map.charger_position.is_some());

    match decoded.status {
        DecodeStatus::Complete => println!("✓ Stream: complete"),
        DecodeStatus::Truncated { offset, .. } => {
            println!("! Stream: truncated at offset {offset}");
        }
    }
    Ok(())
}

fn report(field: &str, present: bool) {
    if present {
        println!("✓ {field}: present");
    } else {
        println!("! {field}: absent");
    }
}

fn diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::InvalidHeader(inner) => format!("invalid header: {inner}"),
        DecodeError::DecompressFailed(msg) => format!("envelope does not inflate: {msg}"),
        DecodeError::DecompressionBomb { limit } => {
            format!("envelope inflates past {limit} bytes (see --max-inflated)")
        }
    }
}
