//! Level table integration tests
//!
//! Checks the generated catalog against the rules the game runtime relies on:
//! id ordering, feature group presence, boss speed ranges and the hand-tuned
//! special cases.

use needle_levels::constants::BOSS_LEVELS;
use needle_levels::levels::{
    EnemyArchetype, LevelRecord, ReflectObjectType, ShieldType, SpeedMode,
};
use needle_levels::generate_levels;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn level(id: u32) -> LevelRecord {
    generate_levels()
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("level {id} missing"))
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_level_ids_are_1_to_30_ascending() {
    let ids: Vec<u32> = generate_levels().iter().map(|l| l.level_id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate_levels(), generate_levels());
}

// ============================================================================
// Feature groups
// ============================================================================

#[test]
fn test_shield_group_values() {
    for level in &generate_levels() {
        if let Some(shield) = &level.shield {
            assert!(level.shield_enabled, "level {}", level.level_id);
            let expected = if level.level_id > 8 { 2 } else { 1 };
            assert_eq!(shield.shield_count, expected, "level {}", level.level_id);
            assert_eq!(shield.shield_speed, 1.0);
        }
    }
}

#[test]
fn test_every_enabled_shield_has_a_type() {
    for level in &generate_levels() {
        assert_eq!(level.shield_enabled, level.shield.is_some(), "level {}", level.level_id);
    }
}

#[test]
fn test_regen_group_values() {
    for level in &generate_levels() {
        assert_eq!(level.regen_enabled, level.regen.is_some(), "level {}", level.level_id);
        if let Some(regen) = &level.regen {
            assert_eq!(regen.regen_base, 0.8);
            assert_eq!(regen.regen_delay, 1.5);
        }
    }
}

#[test]
fn test_reflect_group_values() {
    for level in &generate_levels() {
        assert_eq!(level.reflect_enabled, level.reflect.is_some(), "level {}", level.level_id);
        if let Some(reflect) = &level.reflect {
            assert_eq!(reflect.reflect_object_type, ReflectObjectType::Move);
            assert_eq!(reflect.reflect_object_count, 2);
            assert_eq!(reflect.reflect_max_bounces, 1);
        }
    }
}

#[test]
fn test_multi_target_never_enabled() {
    for level in &generate_levels() {
        assert!(!level.multi_target_enabled);
        assert!(level.multi_target.is_none());
    }
}

#[test]
fn test_weak_points_move_after_level_10() {
    for level in &generate_levels() {
        assert_eq!(level.weak_point_move, level.level_id > 10, "level {}", level.level_id);
    }
}

// ============================================================================
// Bosses
// ============================================================================

#[test]
fn test_boss_levels_are_tier_closers() {
    assert_eq!(generate_levels().boss_levels(), BOSS_LEVELS.to_vec());
}

#[test]
fn test_boss_speed_range_derived_from_own_rotate_speed() {
    for level in &generate_levels() {
        match &level.boss {
            Some(boss) => {
                assert_eq!(level.speed_mode, SpeedMode::Variable);
                assert!(!boss.boss_phases.is_empty());
                assert!(approx(boss.speed_min, level.rotate_speed * 0.8));
                assert!(approx(boss.speed_max, level.rotate_speed * 1.5));
            }
            None => assert_eq!(level.speed_mode, SpeedMode::Fixed),
        }
    }
}

#[test]
fn test_boss_phase_thresholds_descend() {
    for level in &generate_levels() {
        let pcts: Vec<f64> = level.boss_phases().iter().map(|p| p.hp_pct).collect();
        assert!(
            pcts.windows(2).all(|w| w[0] > w[1]),
            "level {} phases {:?}",
            level.level_id,
            pcts
        );
    }
}

#[test]
fn test_boss_phase_counts() {
    let counts: Vec<usize> = BOSS_LEVELS
        .iter()
        .map(|&id| level(id).boss_phases().len())
        .collect();
    assert_eq!(counts, vec![2, 3, 1, 2, 3]);
}

// ============================================================================
// Limited needles
// ============================================================================

#[test]
fn test_decoy_needle_limits() {
    for id in 26..=28 {
        assert_eq!(level(id).limit_needles, Some(15), "level {id}");
    }
    assert_eq!(level(29).limit_needles, Some(20));
    assert!(level(30).limit_needles.is_none());
}

#[test]
fn test_needle_limit_only_in_decoy_tier() {
    for level in &generate_levels() {
        let is_decoy = level.enemy_archetype == EnemyArchetype::Decoy;
        assert_eq!(level.limit_needles_enabled, is_decoy, "level {}", level.level_id);
        assert_eq!(level.limit_needles.is_some(), is_decoy, "level {}", level.level_id);
    }
}

// ============================================================================
// Concrete levels
// ============================================================================

#[test]
fn test_level_1() {
    let l = level(1);
    assert_eq!(l.enemy_archetype, EnemyArchetype::Standard);
    assert_eq!(l.hp, 6);
    assert_eq!(l.weak_point_count, 2);
    assert_eq!(l.rotate_speed, 0.7);
    assert!(!l.weak_point_move);
}

#[test]
fn test_level_10_orbital_boss() {
    let l = level(10);
    assert_eq!(l.enemy_archetype, EnemyArchetype::OrbitalShield);
    assert_eq!(l.variant_id, "O2");
    assert_eq!(l.hp, 25);
    assert_eq!(l.weak_point_count, 4);
    assert_eq!(l.rotate_speed, 1.2);
    assert!(l.shield_enabled);
    assert_eq!(l.shield.as_ref().unwrap().shield_type, ShieldType::Orbital);
    assert_eq!(l.boss_phases().len(), 2);
    assert_eq!(l.speed_mode, SpeedMode::Variable);
    let boss = l.boss.as_ref().unwrap();
    assert!(approx(boss.speed_min, 0.96));
    assert!(approx(boss.speed_max, 1.8));
}

#[test]
fn test_level_30_final_boss() {
    let l = level(30);
    assert_eq!(l.enemy_archetype, EnemyArchetype::FinalBoss);
    assert_eq!(l.hp, 100);
    assert_eq!(l.weak_point_count, 6);
    assert_eq!(l.rotate_speed, 2.5);
    assert!(l.shield_enabled && l.regen_enabled && l.reflect_enabled);
    assert_eq!(l.shield.as_ref().unwrap().shield_type, ShieldType::Breakable);
    assert_eq!(l.boss_phases().len(), 3);
    let last = &l.boss_phases()[2];
    assert_eq!(last.regen_multiplier(), Some(3.0));
    assert_eq!(last.speed_multiplier(), Some(2.0));
    assert!(last.adds_shield());
}

#[test]
fn test_level_20_phase_moves_weak_points() {
    let l = level(20);
    let phase = &l.boss_phases()[0];
    assert_eq!(phase.hp_pct, 0.5);
    assert!(phase.moves_weak_points());
    assert_eq!(phase.speed_multiplier(), Some(1.5));
}

#[test]
fn test_tier_archetypes() {
    let expected = [
        (1, EnemyArchetype::Standard),
        (6, EnemyArchetype::OrbitalShield),
        (11, EnemyArchetype::Regenerator),
        (16, EnemyArchetype::Reflector),
        (21, EnemyArchetype::Fusion),
        (26, EnemyArchetype::Decoy),
        (30, EnemyArchetype::FinalBoss),
    ];
    for (id, archetype) in expected {
        assert_eq!(level(id).enemy_archetype, archetype, "level {id}");
    }
}
