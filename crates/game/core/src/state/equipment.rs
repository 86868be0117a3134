//! Equipment owned by an entity.
//!
//! Equipment stores handles to gear pieces the entity carries. The actual
//! gear data (kind, power, defense) lives behind [`crate::gear::GearOracle`];
//! combat filters these slots for pieces that can attack.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::gear::GearHandle;

/// Equipped gear for one entity.
///
/// # Design
///
/// Slots reference gear by [`GearHandle`]; each entity exclusively owns its
/// equipment, while the definitions behind the handles are shared via the
/// gear oracle. Slot order is meaningful: ties during attack-source
/// selection resolve to the earliest slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: ArrayVec<GearHandle, { GameConfig::MAX_EQUIPMENT_SLOTS }>,
}

/// Error returned when equipping beyond the slot capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no free equipment slot for gear {handle:?}")]
pub struct EquipError {
    pub handle: GearHandle,
}

impl Equipment {
    /// Creates empty equipment (no gear at all).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Equips a gear piece in the first free slot.
    pub fn equip(&mut self, handle: GearHandle) -> Result<(), EquipError> {
        self.slots.try_push(handle).map_err(|_| EquipError { handle })
    }

    /// Unequips the first slot holding `handle`, returning it if present.
    pub fn unequip(&mut self, handle: GearHandle) -> Option<GearHandle> {
        let index = self.slots.iter().position(|slot| *slot == handle)?;
        Some(self.slots.remove(index))
    }

    /// Returns true if no gear is equipped.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over equipped gear handles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = GearHandle> + '_ {
        self.slots.iter().copied()
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    slots: ArrayVec<GearHandle, { GameConfig::MAX_EQUIPMENT_SLOTS }>,
}

impl EquipmentBuilder {
    /// Adds a gear piece; silently ignored beyond capacity (builders are
    /// for literal setups, use [`Equipment::equip`] to observe overflow).
    pub fn with(mut self, handle: GearHandle) -> Self {
        let _ = self.slots.try_push(handle);
        self
    }

    /// Builds the equipment.
    pub fn build(self) -> Equipment {
        Equipment { slots: self.slots }
    }
}
