//! Level record data structures.
//!
//! Field names follow the camelCase keys the game runtime reads. Optional
//! feature groups are flattened into the record so each group is either
//! fully present or absent.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Behavioral class of a level's enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Standard,
    VariableSpin,
    OrbitalShield,
    EnergyShield,
    Regenerator,
    RearCore,
    Reflector,
    Decoy,
    Fusion,
    FinalBoss,
}

impl EnemyArchetype {
    /// All archetypes known to the runtime.
    pub const ALL: [EnemyArchetype; 10] = [
        EnemyArchetype::Standard,
        EnemyArchetype::VariableSpin,
        EnemyArchetype::OrbitalShield,
        EnemyArchetype::EnergyShield,
        EnemyArchetype::Regenerator,
        EnemyArchetype::RearCore,
        EnemyArchetype::Reflector,
        EnemyArchetype::Decoy,
        EnemyArchetype::Fusion,
        EnemyArchetype::FinalBoss,
    ];

    /// Wire name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            EnemyArchetype::Standard => "Standard",
            EnemyArchetype::VariableSpin => "VariableSpin",
            EnemyArchetype::OrbitalShield => "OrbitalShield",
            EnemyArchetype::EnergyShield => "EnergyShield",
            EnemyArchetype::Regenerator => "Regenerator",
            EnemyArchetype::RearCore => "RearCore",
            EnemyArchetype::Reflector => "Reflector",
            EnemyArchetype::Decoy => "Decoy",
            EnemyArchetype::Fusion => "Fusion",
            EnemyArchetype::FinalBoss => "FinalBoss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    Fixed,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShieldType {
    Orbital,
    Energy,
    Breakable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectObjectType {
    Fixed,
    Move,
    Rotate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldGroup {
    pub shield_type: ShieldType,
    pub shield_count: u32,
    pub shield_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenGroup {
    pub regen_base: f64,
    /// Seconds without damage before regen kicks in
    pub regen_delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectGroup {
    pub reflect_object_type: ReflectObjectType,
    pub reflect_object_count: u32,
    pub reflect_max_bounces: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiTargetGroup {
    pub target_count: u32,
}

/// Boss phase list plus the speed range it unlocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossGroup {
    pub boss_phases: Vec<PhaseRecord>,
    pub speed_min: f64,
    pub speed_max: f64,
}

/// One level of the campaign, as read by the game runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub level_id: u32,
    pub enemy_archetype: EnemyArchetype,
    pub variant_id: String,
    pub hp: u32,
    pub weak_point_count: u32,
    pub rotate_speed: f64,
    pub speed_mode: SpeedMode,
    pub weak_point_move: bool,
    pub shield_enabled: bool,
    pub regen_enabled: bool,
    pub reflect_enabled: bool,
    pub limit_needles_enabled: bool,
    pub multi_target_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_needles: Option<u32>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub shield: Option<ShieldGroup>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub regen: Option<RegenGroup>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub reflect: Option<ReflectGroup>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub multi_target: Option<MultiTargetGroup>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub boss: Option<BossGroup>,
}

impl LevelRecord {
    pub fn is_boss(&self) -> bool {
        self.boss.is_some()
    }

    pub fn boss_phases(&self) -> &[PhaseRecord] {
        self.boss
            .as_ref()
            .map(|b| b.boss_phases.as_slice())
            .unwrap_or(&[])
    }
}

/// A change applied when a boss drops below a phase threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseEffect {
    AddShield(bool),
    SpeedMul(f64),
    RegenMul(f64),
    WeakPointMove(bool),
}

impl PhaseEffect {
    pub fn key(&self) -> &'static str {
        match self {
            PhaseEffect::AddShield(_) => "addShield",
            PhaseEffect::SpeedMul(_) => "speedMul",
            PhaseEffect::RegenMul(_) => "regenMul",
            PhaseEffect::WeakPointMove(_) => "weakPointMove",
        }
    }
}

/// Boss phase: an hp threshold plus the effects it triggers.
///
/// Effects keep their authoring order, which is also their key order on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRecord {
    /// Fraction of max hp (0..1) at which the phase starts
    pub hp_pct: f64,
    pub effects: Vec<PhaseEffect>,
}

impl PhaseRecord {
    pub fn at(hp_pct: f64) -> Self {
        Self {
            hp_pct,
            effects: Vec::new(),
        }
    }

    pub fn add_shield(self, add: bool) -> Self {
        self.with(PhaseEffect::AddShield(add))
    }

    pub fn speed_mul(self, mul: f64) -> Self {
        self.with(PhaseEffect::SpeedMul(mul))
    }

    pub fn regen_mul(self, mul: f64) -> Self {
        self.with(PhaseEffect::RegenMul(mul))
    }

    pub fn weak_point_move(self, moves: bool) -> Self {
        self.with(PhaseEffect::WeakPointMove(moves))
    }

    fn with(mut self, effect: PhaseEffect) -> Self {
        self.effects.retain(|e| e.key() != effect.key());
        self.effects.push(effect);
        self
    }

    pub fn speed_multiplier(&self) -> Option<f64> {
        self.effects.iter().find_map(|e| match e {
            PhaseEffect::SpeedMul(m) => Some(*m),
            _ => None,
        })
    }

    pub fn regen_multiplier(&self) -> Option<f64> {
        self.effects.iter().find_map(|e| match e {
            PhaseEffect::RegenMul(m) => Some(*m),
            _ => None,
        })
    }

    pub fn adds_shield(&self) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, PhaseEffect::AddShield(true)))
    }

    pub fn moves_weak_points(&self) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, PhaseEffect::WeakPointMove(true)))
    }
}

impl Serialize for PhaseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.effects.len()))?;
        map.serialize_entry("hpPct", &self.hp_pct)?;
        for effect in &self.effects {
            match effect {
                PhaseEffect::AddShield(v) | PhaseEffect::WeakPointMove(v) => {
                    map.serialize_entry(effect.key(), v)?
                }
                PhaseEffect::SpeedMul(v) | PhaseEffect::RegenMul(v) => {
                    map.serialize_entry(effect.key(), v)?
                }
            }
        }
        map.end()
    }
}

const PHASE_FIELDS: &[&str] = &["hpPct", "addShield", "speedMul", "regenMul", "weakPointMove"];

struct PhaseRecordVisitor;

impl<'de> Visitor<'de> for PhaseRecordVisitor {
    type Value = PhaseRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boss phase object with an hpPct threshold")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PhaseRecord, A::Error> {
        let mut hp_pct: Option<f64> = None;
        let mut effects: Vec<PhaseEffect> = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            let effect = match key.as_str() {
                "hpPct" => {
                    if hp_pct.is_some() {
                        return Err(de::Error::duplicate_field("hpPct"));
                    }
                    hp_pct = Some(map.next_value()?);
                    continue;
                }
                "addShield" => PhaseEffect::AddShield(map.next_value()?),
                "speedMul" => PhaseEffect::SpeedMul(map.next_value()?),
                "regenMul" => PhaseEffect::RegenMul(map.next_value()?),
                "weakPointMove" => PhaseEffect::WeakPointMove(map.next_value()?),
                other => return Err(de::Error::unknown_field(other, PHASE_FIELDS)),
            };
            if effects.iter().any(|e| e.key() == effect.key()) {
                return Err(de::Error::duplicate_field(effect.key()));
            }
            effects.push(effect);
        }

        let hp_pct = hp_pct.ok_or_else(|| de::Error::missing_field("hpPct"))?;
        Ok(PhaseRecord { hp_pct, effects })
    }
}

impl<'de> Deserialize<'de> for PhaseRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PhaseRecordVisitor)
    }
}
