//! Gear definitions and the gear oracle.
//!
//! Gear data lives outside the encounter state and is referenced by handle.
//! Equipment stores [`GearHandle`]s; the oracle resolves them to definitions
//! when combat filters an entity's gear for something it can attack with.

/// Reference to a gear definition stored outside the core (lookup via oracle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearHandle(pub u32);

/// Oracle providing gear definitions.
///
/// Implemented by content catalogs; the core never owns gear data itself.
pub trait GearOracle: Send + Sync {
    fn definition(&self, handle: GearHandle) -> Option<GearDefinition>;

    /// Returns all gear definitions available in this oracle.
    #[cfg(feature = "std")]
    fn all_definitions(&self) -> Vec<GearDefinition>;
}

/// Gear definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle)
/// - `kind` enum holds type-specific data (weapon power, armor defense)
/// - Display data (name, description) is provided by content separately
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearDefinition {
    pub handle: GearHandle,
    pub kind: GearKind,
}

impl GearDefinition {
    pub fn new(handle: GearHandle, kind: GearKind) -> Self {
        Self { handle, kind }
    }

    /// Returns the weapon data if this gear can attack.
    pub fn as_weapon(&self) -> Option<WeaponData> {
        match self.kind {
            GearKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }
}

/// Gear type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GearKind {
    /// Equippable weapon. The only gear kind that satisfies
    /// [`crate::combat::Attackable`].
    Weapon(WeaponData),

    /// Equippable armor.
    Armor(ArmorData),

    /// Carried gear with no combat behavior (charms, torches, keys).
    Trinket,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub power: u32,
}

impl WeaponData {
    pub const fn new(power: u32) -> Self {
        Self { power }
    }
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub defense: u32,
}

impl ArmorData {
    pub const fn new(defense: u32) -> Self {
        Self { defense }
    }
}
