use crate::block_ids::decode_block_ids;
use crate::block_type::BlockType;
use crate::image::MapImage;
use crate::obstacle::{Obstacle, decode_obstacles};
use crate::path::{Point, decode_path};
use crate::pose::Pose;
use crate::zone::{Zone, decode_zones};

/// The typed content of one block payload.
///
/// Produced by [`BlockContent::decode_body`], which is the single
/// dispatch point from a block type to its decoder. There is one variant
/// per `ParsedMap` field, so every decoded value has exactly one place to
/// go. Field-level decoders never fail: a payload that is too short
/// yields `None` or an empty list for that variant, and the rest of the
/// map is unaffected.
///
/// ```text
/// ┌─────────────────────┬────────────────┬────────────────────────┐
/// │ Variant             │ Decoder        │ ParsedMap field        │
/// ├─────────────────────┼────────────────┼────────────────────────┤
/// │ Charger             │ pose           │ charger_position       │
/// │ Image               │ raster         │ image                  │
/// │ Path                │ point list     │ path                   │
/// │ GotoPath            │ point list     │ goto_path              │
/// │ GotoPredictedPath   │ point list     │ goto_predicted_path    │
/// │ GotoTarget          │ pose           │ goto_target            │
/// │ RobotPosition       │ pose           │ robot_position         │
/// │ NoGoAreas           │ zone list      │ no_go_areas            │
/// │ VirtualWalls        │ zone list      │ virtual_walls          │
/// │ Blocks              │ id list        │ blocks                 │
/// │ NoMopAreas          │ zone list      │ no_mop_areas           │
/// │ Obstacles           │ obstacle list  │ obstacles              │
/// │ Skipped             │ none           │ none                   │
/// └─────────────────────┴────────────────┴────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum BlockContent {
    Charger(Option<Pose>),
    Image(Option<MapImage>),
    Path(Vec<Point>),
    GotoPath(Vec<Point>),
    GotoPredictedPath(Vec<Point>),
    GotoTarget(Option<Pose>),
    RobotPosition(Option<Pose>),
    NoGoAreas(Vec<Zone>),
    VirtualWalls(Vec<Zone>),
    Blocks(Vec<u32>),
    NoMopAreas(Vec<Zone>),
    Obstacles(Vec<Obstacle>),
    /// A block type with no decoder. Its payload was not looked at.
    Skipped(BlockType),
}

impl BlockContent {
    /// Decode a block payload, dispatching on its type.
    #[must_use]
    pub fn decode_body(block_type: BlockType, body: &[u8]) -> Self {
        match block_type {
            BlockType::Charger => Self::Charger(Pose::decode_body(body)),
            BlockType::Image => Self::Image(MapImage::decode_body(body)),
            BlockType::Path => Self::Path(decode_path(body)),
            BlockType::GotoPath => Self::GotoPath(decode_path(body)),
            BlockType::GotoPredictedPath => Self::GotoPredictedPath(decode_path(body)),
            BlockType::GotoTarget => Self::GotoTarget(Pose::decode_body(body)),
            BlockType::RobotPosition => Self::RobotPosition(Pose::decode_body(body)),
            BlockType::NoGoAreas => Self::NoGoAreas(decode_zones(body)),
            BlockType::VirtualWalls => Self::VirtualWalls(decode_zones(body)),
            BlockType::Blocks => Self::Blocks(decode_block_ids(body)),
            BlockType::NoMopAreas => Self::NoMopAreas(decode_zones(body)),
            BlockType::Obstacles => Self::Obstacles(decode_obstacles(body)),
            BlockType::CurrentlyCleanedZones
            | BlockType::IgnoredObstacles
            | BlockType::ObstaclesWithPhoto
            | BlockType::CarpetMap
            | BlockType::Unknown(_) => Self::Skipped(block_type),
        }
    }

    /// One-line description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Charger(Some(p)) | Self::GotoTarget(Some(p)) | Self::RobotPosition(Some(p)) => {
                format!("x={} y={} angle={}", p.x, p.y, p.angle)
            }
            Self::Image(Some(img)) => format!(
                "{}x{} px, top={} left={}, {} pixel bytes",
                img.width,
                img.height,
                img.top,
                img.left,
                img.pixels.len()
            ),
            Self::Charger(None)
            | Self::GotoTarget(None)
            | Self::RobotPosition(None)
            | Self::Image(None) => "absent (payload too short)".to_string(),
            Self::Path(points) | Self::GotoPath(points) | Self::GotoPredictedPath(points) => {
                format!("{} points", points.len())
            }
            Self::NoGoAreas(zones) | Self::VirtualWalls(zones) | Self::NoMopAreas(zones) => {
                format!("{} zones", zones.len())
            }
            Self::Blocks(ids) => format!("{} ids", ids.len()),
            Self::Obstacles(obstacles) => format!("{} obstacles", obstacles.len()),
            Self::Skipped(_) => "skipped".to_string(),
        }
    }
}
