use serde::Serialize;
use vacmap_types::Pose;

/// Physical length units per map pixel. Fixed for every map.
pub const RESOLUTION: f64 = 0.05;

/// Presentation-ready map record.
///
/// This is the shape handed to the HTTP layer:
///
/// ```text
/// ┌──────────────────┬────────────────────────────────────────────┐
/// │ Field            │ Source                                     │
/// ├──────────────────┼────────────────────────────────────────────┤
/// │ width, height    │ image block, else 0                        │
/// │ resolution       │ always RESOLUTION                          │
/// │ origin_x/y       │ image left/top, millimetres → metres       │
/// │ pixels           │ image pixel bytes, verbatim                │
/// │ robot_position   │ robot pose block, if any                   │
/// │ charger_position │ charger pose block, if any                 │
/// └──────────────────┴────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommonMap {
    pub width: u32,
    pub height: u32,
    pub resolution: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub pixels: Vec<u8>,
    pub robot_position: Option<Pose>,
    pub charger_position: Option<Pose>,
}

impl Default for CommonMap {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            resolution: RESOLUTION,
            origin_x: 0.0,
            origin_y: 0.0,
            pixels: Vec::new(),
            robot_position: None,
            charger_position: None,
        }
    }
}
