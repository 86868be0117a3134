//! In-memory gear catalog.

use skirmish_core::{ArmorData, GearDefinition, GearHandle, GearKind, GearOracle, WeaponData};

/// Gear oracle backed by a plain definition list.
///
/// Built either from a loaded RON catalog ([`crate::loaders::GearLoader`])
/// or from [`GearCatalog::builtin`] for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct GearCatalog {
    definitions: Vec<GearDefinition>,
}

impl GearCatalog {
    /// Canonical handle of the builtin short sword.
    pub const SHORT_SWORD: GearHandle = GearHandle(1);
    /// Canonical handle of the builtin war axe.
    pub const WAR_AXE: GearHandle = GearHandle(2);
    /// Canonical handle of the builtin leather armor.
    pub const LEATHER_ARMOR: GearHandle = GearHandle(3);
    /// Canonical handle of the builtin lucky charm.
    pub const LUCKY_CHARM: GearHandle = GearHandle(4);
    /// Canonical handle of the builtin rusty claws (monster weapon).
    pub const RUSTY_CLAWS: GearHandle = GearHandle(5);

    /// Creates a catalog from a definition list.
    pub fn new(definitions: Vec<GearDefinition>) -> Self {
        Self { definitions }
    }

    /// A small built-in catalog with one gear piece of each kind.
    pub fn builtin() -> Self {
        Self::new(vec![
            GearDefinition::new(Self::SHORT_SWORD, GearKind::Weapon(WeaponData::new(12))),
            GearDefinition::new(Self::WAR_AXE, GearKind::Weapon(WeaponData::new(18))),
            GearDefinition::new(Self::LEATHER_ARMOR, GearKind::Armor(ArmorData::new(4))),
            GearDefinition::new(Self::LUCKY_CHARM, GearKind::Trinket),
            GearDefinition::new(Self::RUSTY_CLAWS, GearKind::Weapon(WeaponData::new(7))),
        ])
    }

    /// Number of definitions in the catalog.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl GearOracle for GearCatalog {
    fn definition(&self, handle: GearHandle) -> Option<GearDefinition> {
        self.definitions
            .iter()
            .copied()
            .find(|definition| definition.handle == handle)
    }

    fn all_definitions(&self) -> Vec<GearDefinition> {
        self.definitions.clone()
    }
}
