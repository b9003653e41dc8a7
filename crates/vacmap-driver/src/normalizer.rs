use vacmap_types::ParsedMap;
use vacmap_types::units::mm_to_units;

use crate::common_map::{CommonMap, RESOLUTION};

/// Turns a decoded map into the presentation record.
///
/// ```text
///   ParsedMap ──▶ MapNormalizer::normalize() ──▶ CommonMap
/// ```
///
/// Implementations must be pure: the same `ParsedMap` always yields an
/// equal `CommonMap`.
pub trait MapNormalizer {
    fn normalize(&self, map: &ParsedMap) -> CommonMap;
}

/// The standard normalizer.
///
/// Copies image geometry and pixels, converts the image corner into the
/// map origin and passes both poses through unchanged (they are already
/// in metres and degrees). Paths, zones, block ids and obstacles are not
/// part of the record.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNormalizer;

impl MapNormalizer for DefaultNormalizer {
    fn normalize(&self, map: &ParsedMap) -> CommonMap {
        let mut common = CommonMap {
            resolution: RESOLUTION,
            robot_position: map.robot_position,
            charger_position: map.charger_position,
            ..CommonMap::default()
        };

        if let Some(image) = &map.image {
            common.width = image.width;
            common.height = image.height;
            common.origin_x = mm_to_units(image.left);
            common.origin_y = mm_to_units(image.top);
            common.pixels.clone_from(&image.pixels);
        }

        common
    }
}
