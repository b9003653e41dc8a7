/// Implementation of `vacmap normalize`.
///
/// Decodes the buffer, normalizes it and writes JSON. With `--full` the
/// whole decoded map (paths, zones, obstacles, block ids) is written
/// instead of the presentation record.
use std::fs;

use anyhow::{Context, Result};
use vacmap_decoder::{DecoderConfig, MapDecoder};
use vacmap_driver::{DefaultNormalizer, MapNormalizer};

use crate::NormalizeArgs;

/// Run the `vacmap normalize` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or the output
/// cannot be written.
pub fn run(args: &NormalizeArgs, config: &DecoderConfig) -> Result<()> {
    let raw =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let decoded = MapDecoder::decode_with_config(&raw, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    if !decoded.is_complete() {
        tracing::warn!(status = ?decoded.status, "map is truncated, output is partial");
    }

    let json = if args.full {
        to_json(&decoded.map, args.compact)?
    } else {
        to_json(&DefaultNormalizer.normalize(&decoded.map), args.compact)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("cannot serialize map")
}
