// Level table size
pub const LEVEL_COUNT: u32 = 30;
pub const LEVELS_PER_TIER: u32 = 5;

// Shield group
pub const SHIELD_SPEED: f64 = 1.0;
pub const SHIELD_COUNT_SINGLE: u32 = 1;
pub const SHIELD_COUNT_DOUBLE: u32 = 2;
/// Levels above this id spawn two shields instead of one.
pub const DOUBLE_SHIELD_AFTER_LEVEL: u32 = 8;

// Regen group
pub const REGEN_BASE: f64 = 0.8;
pub const REGEN_DELAY_SECONDS: f64 = 1.5;

// Reflect group
pub const REFLECT_OBJECT_COUNT: u32 = 2;
pub const REFLECT_MAX_BOUNCES: u32 = 1;

// Boss speed range, as multipliers of the record's rotate speed
pub const BOSS_SPEED_MIN_MUL: f64 = 0.8;
pub const BOSS_SPEED_MAX_MUL: f64 = 1.5;

/// Weak points relocate on every level past this id.
pub const WEAK_POINT_MOVE_AFTER_LEVEL: u32 = 10;

// Limited needles (Decoy tier)
pub const DECOY_LIMIT_NEEDLES: u32 = 15;
pub const LAST_DECOY_LEVEL: u32 = 29;
pub const LAST_DECOY_LIMIT_NEEDLES: u32 = 20;

/// Boss level ids. Every tier except the first closes on a boss.
pub const BOSS_LEVELS: [u32; 5] = [10, 15, 20, 25, 30];
