//! Encounter state types.
//!
//! This module contains everything stored for one encounter:
//! - EncounterState: the roster of participating entities
//! - EntityState: per-entity vitality, kind, and owned equipment
//! - VitalityMeter: bounded vitality resource
//! - Equipment: gear handles owned by an entity

pub mod common;
pub mod entity;
pub mod equipment;
pub mod vitality;

pub use common::EntityId;
pub use entity::{EntityKind, EntityState};
pub use equipment::{EquipError, Equipment, EquipmentBuilder};
pub use vitality::VitalityMeter;

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Error returned when adding an entity to the roster fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("entity {0} already exists in this encounter")]
    DuplicateId(EntityId),

    #[error("encounter roster is full ({capacity} entities)")]
    RosterFull { capacity: usize },
}

/// Aggregate state for every entity in the encounter.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    entities: ArrayVec<EntityState, { GameConfig::MAX_ENTITIES }>,
}

impl EncounterState {
    /// Creates an empty encounter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity to the roster.
    ///
    /// Ids must be unique within an encounter; the roster is bounded by
    /// [`GameConfig::MAX_ENTITIES`].
    pub fn spawn(&mut self, entity: EntityState) -> Result<(), SpawnError> {
        if self.entity(entity.id).is_some() {
            return Err(SpawnError::DuplicateId(entity.id));
        }
        self.entities
            .try_push(entity)
            .map_err(|_| SpawnError::RosterFull {
                capacity: GameConfig::MAX_ENTITIES,
            })
    }

    /// Returns a reference to an entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// Returns a mutable reference to an entity by id.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityState> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    /// Returns the hero, if one has been spawned.
    pub fn hero(&self) -> Option<&EntityState> {
        self.entity(EntityId::HERO)
    }

    /// Returns an iterator over all entities in spawn order.
    pub fn all_entities(&self) -> impl Iterator<Item = &EntityState> {
        self.entities.iter()
    }

    /// Returns an iterator over entities that can still act (alive, not fled).
    pub fn active_entities(&self) -> impl Iterator<Item = &EntityState> {
        self.entities.iter().filter(|entity| entity.is_active())
    }

    /// Returns true if any monster is still active.
    pub fn has_active_monsters(&self) -> bool {
        self.active_entities()
            .any(|entity| entity.kind == EntityKind::Monster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster(id: u32) -> EntityState {
        EntityState::monster(EntityId(id), 40, Equipment::empty())
    }

    #[test]
    fn spawn_rejects_duplicate_ids() {
        let mut state = EncounterState::new();
        state.spawn(monster(1)).unwrap();
        assert_eq!(
            state.spawn(monster(1)),
            Err(SpawnError::DuplicateId(EntityId(1)))
        );
    }

    #[test]
    fn spawn_rejects_overflow() {
        let mut state = EncounterState::new();
        for id in 0..GameConfig::MAX_ENTITIES as u32 {
            state.spawn(monster(id)).unwrap();
        }
        assert!(matches!(
            state.spawn(monster(999)),
            Err(SpawnError::RosterFull { .. })
        ));
    }

    #[test]
    fn active_entities_excludes_defeated_and_fled() {
        let mut state = EncounterState::new();
        state
            .spawn(EntityState::hero(100, Equipment::empty()))
            .unwrap();
        state.spawn(monster(1)).unwrap();
        state.spawn(monster(2)).unwrap();

        state.entity_mut(EntityId(1)).unwrap().vitality.set(0);
        state.entity_mut(EntityId(2)).unwrap().fled = true;

        let active: Vec<_> = state.active_entities().map(|entity| entity.id).collect();
        assert_eq!(active, vec![EntityId::HERO]);
        assert!(!state.has_active_monsters());
    }
}
