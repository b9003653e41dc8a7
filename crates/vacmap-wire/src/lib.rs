#![warn(clippy::pedantic)]

pub mod block_frame;
pub mod cursor;
pub mod error;
pub mod header;

pub use block_frame::BlockFrame;
pub use cursor::Cursor;
pub use error::WireError;
pub use header::MapHeader;
