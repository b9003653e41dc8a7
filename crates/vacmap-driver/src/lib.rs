#![warn(clippy::pedantic)]

pub mod common_map;
pub mod normalizer;

pub use common_map::{CommonMap, RESOLUTION};
pub use normalizer::{DefaultNormalizer, MapNormalizer};
