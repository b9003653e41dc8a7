use vacmap_wire::block_frame::block_type as wire;

/// Semantic block type identifiers.
///
/// Each variant maps to one `u16` tag from
/// `vacmap_wire::block_frame::block_type`. Tags this version has no name
/// for land in `Unknown(u16)`, which the decoder skips.
///
/// ```text
/// ┌──────┬──────────────────────┬─────────────────────────────┐
/// │ Wire │ Variant              │ Decoded as                  │
/// ├──────┼──────────────────────┼─────────────────────────────┤
/// │ 1    │ Charger              │ pose                        │
/// │ 2    │ Image                │ raster                      │
/// │ 3    │ Path                 │ point list                  │
/// │ 4    │ GotoPath             │ point list                  │
/// │ 5    │ GotoPredictedPath    │ point list                  │
/// │ 6    │ CurrentlyCleanedZones│ (skipped)                   │
/// │ 7    │ GotoTarget           │ pose                        │
/// │ 8    │ RobotPosition        │ pose                        │
/// │ 9    │ NoGoAreas            │ zone list                   │
/// │ 10   │ VirtualWalls         │ zone list                   │
/// │ 11   │ Blocks               │ id list                     │
/// │ 12   │ NoMopAreas           │ zone list                   │
/// │ 13   │ Obstacles            │ obstacle list               │
/// │ 14   │ IgnoredObstacles     │ (skipped)                   │
/// │ 15   │ ObstaclesWithPhoto   │ (skipped)                   │
/// │ 16   │ CarpetMap            │ (skipped)                   │
/// └──────┴──────────────────────┴─────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Charger,
    Image,
    Path,
    GotoPath,
    GotoPredictedPath,
    CurrentlyCleanedZones,
    GotoTarget,
    RobotPosition,
    NoGoAreas,
    VirtualWalls,
    Blocks,
    NoMopAreas,
    Obstacles,
    IgnoredObstacles,
    ObstaclesWithPhoto,
    CarpetMap,
    /// A tag with no assigned meaning. The raw value is kept for
    /// diagnostics.
    Unknown(u16),
}

impl BlockType {
    #[must_use]
    pub fn wire_id(self) -> u16 {
        match self {
            Self::Charger => wire::CHARGER,
            Self::Image => wire::IMAGE,
            Self::Path => wire::PATH,
            Self::GotoPath => wire::GOTO_PATH,
            Self::GotoPredictedPath => wire::GOTO_PREDICTED_PATH,
            Self::CurrentlyCleanedZones => wire::CURRENTLY_CLEANED_ZONES,
            Self::GotoTarget => wire::GOTO_TARGET,
            Self::RobotPosition => wire::ROBOT_POSITION,
            Self::NoGoAreas => wire::NO_GO_AREAS,
            Self::VirtualWalls => wire::VIRTUAL_WALLS,
            Self::Blocks => wire::BLOCKS,
            Self::NoMopAreas => wire::NO_MOP_AREAS,
            Self::Obstacles => wire::OBSTACLES,
            Self::IgnoredObstacles => wire::IGNORED_OBSTACLES,
            Self::ObstaclesWithPhoto => wire::OBSTACLES_WITH_PHOTO,
            Self::CarpetMap => wire::CARPET_MAP,
            Self::Unknown(id) => id,
        }
    }

    #[must_use]
    pub fn from_wire_id(id: u16) -> Self {
        match id {
            wire::CHARGER => Self::Charger,
            wire::IMAGE => Self::Image,
            wire::PATH => Self::Path,
            wire::GOTO_PATH => Self::GotoPath,
            wire::GOTO_PREDICTED_PATH => Self::GotoPredictedPath,
            wire::CURRENTLY_CLEANED_ZONES => Self::CurrentlyCleanedZones,
            wire::GOTO_TARGET => Self::GotoTarget,
            wire::ROBOT_POSITION => Self::RobotPosition,
            wire::NO_GO_AREAS => Self::NoGoAreas,
            wire::VIRTUAL_WALLS => Self::VirtualWalls,
            wire::BLOCKS => Self::Blocks,
            wire::NO_MOP_AREAS => Self::NoMopAreas,
            wire::OBSTACLES => Self::Obstacles,
            wire::IGNORED_OBSTACLES => Self::IgnoredObstacles,
            wire::OBSTACLES_WITH_PHOTO => Self::ObstaclesWithPhoto,
            wire::CARPET_MAP => Self::CarpetMap,
            other => Self::Unknown(other),
        }
    }

    /// Whether a payload decoder exists for this type.
    #[must_use]
    pub fn is_decoded(self) -> bool {
        !matches!(
            self,
            Self::CurrentlyCleanedZones
                | Self::IgnoredObstacles
                | Self::ObstaclesWithPhoto
                | Self::CarpetMap
                | Self::Unknown(_)
        )
    }

    /// Upper-case label used in logs and CLI output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Charger => "CHARGER",
            Self::Image => "IMAGE",
            Self::Path => "PATH",
            Self::GotoPath => "GOTO_PATH",
            Self::GotoPredictedPath => "GOTO_PREDICTED_PATH",
            Self::CurrentlyCleanedZones => "CURRENTLY_CLEANED_ZONES",
            Self::GotoTarget => "GOTO_TARGET",
            Self::RobotPosition => "ROBOT_POSITION",
            Self::NoGoAreas => "NO_GO_AREAS",
            Self::VirtualWalls => "VIRTUAL_WALLS",
            Self::Blocks => "BLOCKS",
            Self::NoMopAreas => "NO_MOP_AREAS",
            Self::Obstacles => "OBSTACLES",
            Self::IgnoredObstacles => "IGNORED_OBSTACLES",
            Self::ObstaclesWithPhoto => "OBSTACLES_WITH_PHOTO",
            Self::CarpetMap => "CARPET_MAP",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_named_ids_roundtrip() {
        for id in 1..=16u16 {
            let ty = BlockType::from_wire_id(id);
            assert!(!matches!(ty, BlockType::Unknown(_)), "id {id} has no name");
            assert_eq!(ty.wire_id(), id);
        }
    }

    #[test]
    fn unknown_value_preserved() {
        for id in [0u16, 17, 0x42, u16::MAX] {
            let ty = BlockType::from_wire_id(id);
            assert_eq!(ty, BlockType::Unknown(id));
            assert_eq!(ty.wire_id(), id);
            assert!(!ty.is_decoded());
        }
    }

    #[test]
    fn decoded_set_matches_registry() {
        let decoded: Vec<u16> = (1..=16u16)
            .filter(|&id| BlockType::from_wire_id(id).is_decoded())
            .collect();
        assert_eq!(decoded, vec![1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12, 13]);
    }
}
