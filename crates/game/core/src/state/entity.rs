//! Entity state.
//!
//! The entity hierarchy of a classic object model collapses into a kind enum
//! plus one plain struct: what an entity *is* is data, what it can *do* with
//! its gear is the [`crate::combat::Attackable`] capability.

use super::{EntityId, Equipment, VitalityMeter};
use crate::config::GameConfig;

/// Kind of actor participating in an encounter.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// The controllable protagonist. Delegates combat to its equipment.
    Hero,
    /// Hostile actor opposing the hero.
    Monster,
}

/// Complete state for one entity in an encounter.
///
/// # Invariants
///
/// - `vitality` is clamped into `[0, max]` by [`VitalityMeter`]
/// - `equipment` is exclusively owned; gear definitions are shared via the
///   gear oracle, never embedded here
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityState {
    pub id: EntityId,
    pub kind: EntityKind,
    pub vitality: VitalityMeter,

    /// Equipped gear. Combat selects an attack-capable piece from here.
    pub equipment: Equipment,

    /// Set once the entity escapes; a fled entity no longer participates.
    pub fled: bool,
}

impl EntityState {
    pub fn new(id: EntityId, kind: EntityKind, vitality: VitalityMeter, equipment: Equipment) -> Self {
        Self {
            id,
            kind,
            vitality,
            equipment,
            fled: false,
        }
    }

    /// Creates a hero with full vitality and the given equipment.
    pub fn hero(max_vitality: u32, equipment: Equipment) -> Self {
        Self::new(
            EntityId::HERO,
            EntityKind::Hero,
            VitalityMeter::at_max(max_vitality),
            equipment,
        )
    }

    /// Creates a monster with full vitality and the given equipment.
    pub fn monster(id: EntityId, max_vitality: u32, equipment: Equipment) -> Self {
        Self::new(
            id,
            EntityKind::Monster,
            VitalityMeter::at_max(max_vitality),
            equipment,
        )
    }

    /// Creates a hero at the configured starting vitality.
    pub fn hero_from(config: &GameConfig, equipment: Equipment) -> Self {
        Self::hero(config.hero_vitality, equipment)
    }

    /// Creates a monster at the configured starting vitality.
    pub fn monster_from(config: &GameConfig, id: EntityId, equipment: Equipment) -> Self {
        Self::monster(id, config.monster_vitality, equipment)
    }

    /// Quick check if the entity still has vitality.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.vitality.is_alive()
    }

    /// Returns true if the entity has escaped the encounter.
    #[inline]
    pub fn has_fled(&self) -> bool {
        self.fled
    }

    /// Alive and still present: the entity can act and be targeted.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_alive() && !self.fled
    }
}
