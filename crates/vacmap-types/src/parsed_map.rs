use serde::Serialize;
use vacmap_wire::MapHeader;

use crate::block::BlockContent;
use crate::image::MapImage;
use crate::obstacle::Obstacle;
use crate::path::Point;
use crate::pose::Pose;
use crate::zone::Zone;

/// Everything decoded from one map buffer.
///
/// Every field is independently optional or possibly empty: a missing or
/// malformed block leaves only its own field at the default. When a block
/// type appears more than once, the later block wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParsedMap {
    pub header: MapHeader,
    pub image: Option<MapImage>,
    pub robot_position: Option<Pose>,
    pub charger_position: Option<Pose>,
    pub goto_target: Option<Pose>,
    pub path: Vec<Point>,
    pub goto_path: Vec<Point>,
    pub goto_predicted_path: Vec<Point>,
    pub no_go_areas: Vec<Zone>,
    pub no_mop_areas: Vec<Zone>,
    pub virtual_walls: Vec<Zone>,
    pub blocks: Vec<u32>,
    pub obstacles: Vec<Obstacle>,
}

impl ParsedMap {
    #[must_use]
    pub fn new(header: MapHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Store decoded block content in the matching field.
    pub fn apply(&mut self, content: BlockContent) {
        match content {
            BlockContent::Charger(pose) => self.charger_position = pose,
            BlockContent::Image(image) => self.image = image,
            BlockContent::Path(points) => self.path = points,
            BlockContent::GotoPath(points) => self.goto_path = points,
            BlockContent::GotoPredictedPath(points) => self.goto_predicted_path = points,
            BlockContent::GotoTarget(pose) => self.goto_target = pose,
            BlockContent::RobotPosition(pose) => self.robot_position = pose,
            BlockContent::NoGoAreas(zones) => self.no_go_areas = zones,
            BlockContent::VirtualWalls(zones) => self.virtual_walls = zones,
            BlockContent::Blocks(ids) => self.blocks = ids,
            BlockContent::NoMopAreas(zones) => self.no_mop_areas = zones,
            BlockContent::Obstacles(obstacles) => self.obstacles = obstacles,
            BlockContent::Skipped(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_type::BlockType;

    fn pose(x: f64) -> Pose {
        Pose { x, y: 0.0, angle: 0.0 }
    }

    #[test]
    fn poses_land_in_their_own_fields() {
        let mut map = ParsedMap::default();
        map.apply(BlockContent::Charger(Some(pose(1.0))));
        map.apply(BlockContent::RobotPosition(Some(pose(2.0))));
        map.apply(BlockContent::GotoTarget(Some(pose(3.0))));

        assert_eq!(map.charger_position, Some(pose(1.0)));
        assert_eq!(map.robot_position, Some(pose(2.0)));
        assert_eq!(map.goto_target, Some(pose(3.0)));
    }

    #[test]
    fn later_block_replaces_earlier() {
        let mut map = ParsedMap::default();
        map.apply(BlockContent::Path(vec![Point { x: 1.0, y: 1.0 }]));
        map.apply(BlockContent::Path(Vec::new()));
        assert!(map.path.is_empty());
    }

    #[test]
    fn absent_field_does_not_touch_siblings() {
        let mut map = ParsedMap::default();
        map.apply(BlockContent::RobotPosition(Some(pose(5.0))));
        map.apply(BlockContent::Image(None));
        map.apply(BlockContent::Skipped(BlockType::Unknown(99)));

        assert_eq!(map.robot_position, Some(pose(5.0)));
        assert!(map.image.is_none());
    }

    #[test]
    fn zone_lists_stay_separate() {
        let zone = Zone {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        let mut map = ParsedMap::default();
        map.apply(BlockContent::NoMopAreas(vec![zone]));
        assert_eq!(map.no_mop_areas, vec![zone]);
        assert!(map.no_go_areas.is_empty());
        assert!(map.virtual_walls.is_empty());
    }
}
