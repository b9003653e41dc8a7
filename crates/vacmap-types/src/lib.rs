#![warn(clippy::pedantic)]

pub mod block;
pub mod block_ids;
pub mod block_type;
pub mod image;
pub mod obstacle;
pub mod parsed_map;
pub mod path;
pub mod pose;
pub mod units;
pub mod zone;

mod records;

pub use block::BlockContent;
pub use block_type::BlockType;
pub use image::MapImage;
pub use obstacle::Obstacle;
pub use parsed_map::ParsedMap;
pub use path::Point;
pub use pose::Pose;
pub use vacmap_wire::MapHeader;
pub use zone::Zone;
