//! Needle Levels - level catalog generator library
//!
//! Builds the fixed 30-level campaign table the game runtime loads as
//! `LevelConfig.json`.

pub mod build_info;
pub mod constants;
pub mod levels;

pub use levels::{create_level, generate_levels, LevelRecord, LevelSpec, LevelTable};
