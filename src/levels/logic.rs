//! Level construction helper.

use super::types::{
    BossGroup, EnemyArchetype, LevelRecord, MultiTargetGroup, PhaseRecord, ReflectGroup,
    ReflectObjectType, RegenGroup, ShieldGroup, ShieldType, SpeedMode,
};
use crate::constants::*;

/// Inputs for a single level before presence rules are applied.
///
/// Enabling a feature without its parameter (a shield with no type, limited
/// needles with no count) sets the toggle but leaves the field group out.
#[derive(Debug, Clone)]
pub struct LevelSpec {
    pub level_id: u32,
    pub archetype: EnemyArchetype,
    pub variant: &'static str,
    pub hp: u32,
    pub weak_point_count: u32,
    pub rotate_speed: f64,
    pub shield_enabled: bool,
    pub shield_type: Option<ShieldType>,
    pub regen_enabled: bool,
    pub reflect_enabled: bool,
    pub limit_needles_enabled: bool,
    pub limit_needles: Option<u32>,
    pub multi_target_enabled: bool,
    pub target_count: Option<u32>,
    /// Empty for regular levels
    pub boss_phases: Vec<PhaseRecord>,
}

impl LevelSpec {
    /// A Standard/S1 level with the entry-level stats (5 hp, 2 weak points, 0.6 speed).
    pub fn new(level_id: u32) -> Self {
        Self {
            level_id,
            archetype: EnemyArchetype::Standard,
            variant: "S1",
            hp: 5,
            weak_point_count: 2,
            rotate_speed: 0.6,
            shield_enabled: false,
            shield_type: None,
            regen_enabled: false,
            reflect_enabled: false,
            limit_needles_enabled: false,
            limit_needles: None,
            multi_target_enabled: false,
            target_count: None,
            boss_phases: Vec::new(),
        }
    }

    pub fn archetype(mut self, archetype: EnemyArchetype, variant: &'static str) -> Self {
        self.archetype = archetype;
        self.variant = variant;
        self
    }

    pub fn stats(mut self, hp: u32, weak_point_count: u32, rotate_speed: f64) -> Self {
        self.hp = hp;
        self.weak_point_count = weak_point_count;
        self.rotate_speed = rotate_speed;
        self
    }

    pub fn shield(mut self, shield_type: ShieldType) -> Self {
        self.shield_enabled = true;
        self.shield_type = Some(shield_type);
        self
    }

    pub fn regen(mut self) -> Self {
        self.regen_enabled = true;
        self
    }

    pub fn reflect(mut self) -> Self {
        self.reflect_enabled = true;
        self
    }

    pub fn limit_needles(mut self, count: u32) -> Self {
        self.limit_needles_enabled = true;
        self.limit_needles = Some(count);
        self
    }

    pub fn multi_target(mut self, target_count: u32) -> Self {
        self.multi_target_enabled = true;
        self.target_count = Some(target_count);
        self
    }

    pub fn boss_phases(mut self, phases: Vec<PhaseRecord>) -> Self {
        self.boss_phases = phases;
        self
    }
}

pub fn shield_count_for_level(level_id: u32) -> u32 {
    if level_id > DOUBLE_SHIELD_AFTER_LEVEL {
        SHIELD_COUNT_DOUBLE
    } else {
        SHIELD_COUNT_SINGLE
    }
}

/// Build one level record, attaching each feature group only when its toggle
/// (and parameter, where one is needed) is set.
pub fn create_level(spec: LevelSpec) -> LevelRecord {
    let level_id = spec.level_id;

    let limit_needles = if spec.limit_needles_enabled {
        spec.limit_needles
    } else {
        None
    };

    let shield = match (spec.shield_enabled, spec.shield_type) {
        (true, Some(shield_type)) => Some(ShieldGroup {
            shield_type,
            shield_count: shield_count_for_level(level_id),
            shield_speed: SHIELD_SPEED,
        }),
        _ => None,
    };

    let regen = spec.regen_enabled.then_some(RegenGroup {
        regen_base: REGEN_BASE,
        regen_delay: REGEN_DELAY_SECONDS,
    });

    let reflect = spec.reflect_enabled.then_some(ReflectGroup {
        reflect_object_type: ReflectObjectType::Move,
        reflect_object_count: REFLECT_OBJECT_COUNT,
        reflect_max_bounces: REFLECT_MAX_BOUNCES,
    });

    let multi_target = match (spec.multi_target_enabled, spec.target_count) {
        (true, Some(target_count)) => Some(MultiTargetGroup { target_count }),
        _ => None,
    };

    let boss = if spec.boss_phases.is_empty() {
        None
    } else {
        Some(BossGroup {
            boss_phases: spec.boss_phases,
            speed_min: spec.rotate_speed * BOSS_SPEED_MIN_MUL,
            speed_max: spec.rotate_speed * BOSS_SPEED_MAX_MUL,
        })
    };

    let speed_mode = if boss.is_some() {
        SpeedMode::Variable
    } else {
        SpeedMode::Fixed
    };

    LevelRecord {
        level_id,
        enemy_archetype: spec.archetype,
        variant_id: spec.variant.to_string(),
        hp: spec.hp,
        weak_point_count: spec.weak_point_count,
        rotate_speed: spec.rotate_speed,
        speed_mode,
        weak_point_move: level_id > WEAK_POINT_MOVE_AFTER_LEVEL,
        shield_enabled: spec.shield_enabled,
        regen_enabled: spec.regen_enabled,
        reflect_enabled: spec.reflect_enabled,
        limit_needles_enabled: spec.limit_needles_enabled,
        multi_target_enabled: spec.multi_target_enabled,
        limit_needles,
        shield,
        regen,
        reflect,
        multi_target,
        boss,
    }
}
