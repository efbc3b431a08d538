//! Level catalog generation.
//!
//! Each level is built by `create_level` from a `LevelSpec`; the tiers in
//! `data` supply the specs and `generate_levels` assembles the full table.

mod data;
mod logic;
mod table;
mod types;

pub use data::{
    decoy_tier, fusion_tier, generate_levels, orbital_shield_tier, reflector_tier,
    regenerator_tier, standard_tier,
};
pub use logic::{create_level, shield_count_for_level, LevelSpec};
pub use table::LevelTable;
pub use types::*;
