#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod envelope;
pub mod error;
pub mod walker;

pub use config::DecoderConfig;
pub use decoder::{DecodeStatus, DecodedMap, MapDecoder};
pub use envelope::Envelope;
pub use error::DecodeError;
pub use walker::{BlockWalker, WalkItem};
