//! The level catalog: six tiers of five levels each.
//!
//! Regular levels follow their tier's linear progression; boss levels use
//! hand-tuned literal stats that do not sit on the progression.

use super::logic::{create_level, LevelSpec};
use super::table::LevelTable;
use super::types::{EnemyArchetype, LevelRecord, PhaseRecord, ShieldType};
use crate::constants::{DECOY_LIMIT_NEEDLES, LAST_DECOY_LEVEL, LAST_DECOY_LIMIT_NEEDLES};

/// `base + steps * step`, evaluated in that order so the floats match the
/// shipped table bit for bit.
fn progression(base: f64, steps: u32, step: f64) -> f64 {
    base + f64::from(steps) * step
}

/// Levels 1-5: no mechanics.
pub fn standard_tier() -> Vec<LevelRecord> {
    (1..=5)
        .map(|i| {
            create_level(
                LevelSpec::new(i)
                    .archetype(EnemyArchetype::Standard, "S1")
                    .stats(5 + i, 2 + i / 3, progression(0.6, i, 0.1)),
            )
        })
        .collect()
}

fn orbital_boss_phases() -> Vec<PhaseRecord> {
    vec![
        PhaseRecord::at(0.6).add_shield(true).speed_mul(1.2),
        PhaseRecord::at(0.3).add_shield(true).speed_mul(1.5),
    ]
}

/// Levels 6-10: shields, orbital up to 8 and energy after. Boss on 10.
pub fn orbital_shield_tier() -> Vec<LevelRecord> {
    (6..=10)
        .map(|i| {
            if i == 10 {
                return create_level(
                    LevelSpec::new(i)
                        .archetype(EnemyArchetype::OrbitalShield, "O2")
                        .stats(25, 4, 1.2)
                        .shield(ShieldType::Orbital)
                        .boss_phases(orbital_boss_phases()),
                );
            }
            let shield_type = if i < 9 {
                ShieldType::Orbital
            } else {
                ShieldType::Energy
            };
            create_level(
                LevelSpec::new(i)
                    .archetype(EnemyArchetype::OrbitalShield, "O1")
                    .stats(12 + (i - 6) * 2, 3, progression(1.0, i - 6, 0.1))
                    .shield(shield_type),
            )
        })
        .collect()
}

fn regenerator_boss_phases() -> Vec<PhaseRecord> {
    vec![
        PhaseRecord::at(0.7).add_shield(false).speed_mul(1.0),
        PhaseRecord::at(0.4).add_shield(true).speed_mul(1.1),
        PhaseRecord::at(0.2)
            .add_shield(true)
            .speed_mul(1.2)
            .regen_mul(1.2),
    ]
}

/// Levels 11-15: regen. The boss on 15 also carries an orbital shield.
pub fn regenerator_tier() -> Vec<LevelRecord> {
    (11..=15)
        .map(|i| {
            if i == 15 {
                return create_level(
                    LevelSpec::new(i)
                        .archetype(EnemyArchetype::Regenerator, "R3")
                        .stats(35, 4, 1.5)
                        .shield(ShieldType::Orbital)
                        .regen()
                        .boss_phases(regenerator_boss_phases()),
                );
            }
            create_level(
                LevelSpec::new(i)
                    .archetype(EnemyArchetype::Regenerator, "R1")
                    .stats(18 + (i - 11) * 2, 3, progression(1.2, i - 11, 0.1))
                    .regen(),
            )
        })
        .collect()
}

fn reflector_boss_phases() -> Vec<PhaseRecord> {
    vec![PhaseRecord::at(0.5).weak_point_move(true).speed_mul(1.5)]
}

/// Levels 16-20: reflecting objects. Boss on 20.
pub fn reflector_tier() -> Vec<LevelRecord> {
    (16..=20)
        .map(|i| {
            if i == 20 {
                return create_level(
                    LevelSpec::new(i)
                        .archetype(EnemyArchetype::Reflector, "B1")
                        .stats(45, 4, 1.8)
                        .reflect()
                        .boss_phases(reflector_boss_phases()),
                );
            }
            create_level(
                LevelSpec::new(i)
                    .archetype(EnemyArchetype::Reflector, "B1")
                    .stats(25 + (i - 16) * 2, 3, progression(1.4, i - 16, 0.1))
                    .reflect(),
            )
        })
        .collect()
}

fn fusion_boss_phases() -> Vec<PhaseRecord> {
    vec![
        PhaseRecord::at(0.6).add_shield(true).speed_mul(1.3),
        PhaseRecord::at(0.3).regen_mul(2.0).speed_mul(1.5),
    ]
}

/// Levels 21-25: orbital shield plus regen. The boss on 25 swaps to an energy shield.
pub fn fusion_tier() -> Vec<LevelRecord> {
    (21..=25)
        .map(|i| {
            if i == 25 {
                return create_level(
                    LevelSpec::new(i)
                        .archetype(EnemyArchetype::Fusion, "F1")
                        .stats(60, 5, 2.0)
                        .shield(ShieldType::Energy)
                        .regen()
                        .boss_phases(fusion_boss_phases()),
                );
            }
            create_level(
                LevelSpec::new(i)
                    .archetype(EnemyArchetype::Fusion, "F1")
                    .stats(35 + (i - 21) * 3, 4, progression(1.6, i - 21, 0.1))
                    .shield(ShieldType::Orbital)
                    .regen(),
            )
        })
        .collect()
}

fn final_boss_phases() -> Vec<PhaseRecord> {
    vec![
        PhaseRecord::at(0.8).add_shield(true).speed_mul(1.2),
        PhaseRecord::at(0.5).weak_point_move(true).speed_mul(1.5),
        PhaseRecord::at(0.2)
            .regen_mul(3.0)
            .speed_mul(2.0)
            .add_shield(true),
    ]
}

/// Levels 26-30: decoys with energy shields and limited needles, then the
/// final boss with every mechanic except limited needles.
pub fn decoy_tier() -> Vec<LevelRecord> {
    (26..=30)
        .map(|i| {
            if i == 30 {
                return create_level(
                    LevelSpec::new(i)
                        .archetype(EnemyArchetype::FinalBoss, "X1")
                        .stats(100, 6, 2.5)
                        .shield(ShieldType::Breakable)
                        .regen()
                        .reflect()
                        .boss_phases(final_boss_phases()),
                );
            }
            create_level(
                LevelSpec::new(i)
                    .archetype(EnemyArchetype::Decoy, "D1")
                    .stats(50 + (i - 26) * 4, 4, progression(1.8, i - 26, 0.1))
                    .shield(ShieldType::Energy)
                    .limit_needles(DECOY_LIMIT_NEEDLES),
            )
        })
        .collect()
}

/// Build the full 30-level table in campaign order.
///
/// The last decoy level gets a larger needle budget after construction; it is
/// a tuning override, not part of the tier progression.
pub fn generate_levels() -> LevelTable {
    let mut levels = Vec::with_capacity(crate::constants::LEVEL_COUNT as usize);
    levels.extend(standard_tier());
    levels.extend(orbital_shield_tier());
    levels.extend(regenerator_tier());
    levels.extend(reflector_tier());
    levels.extend(fusion_tier());
    levels.extend(decoy_tier());

    let mut table = LevelTable::new(levels);
    if let Some(level) = table.get_mut(LAST_DECOY_LEVEL) {
        level.limit_needles = Some(LAST_DECOY_LIMIT_NEEDLES);
    }
    table
}
