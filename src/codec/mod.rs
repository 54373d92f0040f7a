//! Offline field animation codec
//!
//! Generators build a looping column matrix, the encoder turns it into a
//! diff program, and the exporters print it as source for the game to embed.

pub mod encoder;
pub mod export;
pub mod matrix;
pub mod patterns;

pub use encoder::{EncodeError, EncodeStats, Encoded, encode, replay};
pub use export::Format;
pub use matrix::ColumnMatrix;
pub use patterns::{Pattern, PatternOptions};
