/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Starting vitality for the hero when content does not override it.
    pub hero_vitality: u32,

    /// Starting vitality for freshly spawned monsters.
    pub monster_vitality: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of entities in one encounter (hero + monsters).
    pub const MAX_ENTITIES: usize = 16;
    /// Maximum number of gear pieces an entity can have equipped at once.
    pub const MAX_EQUIPMENT_SLOTS: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HERO_VITALITY: u32 = 100;
    pub const DEFAULT_MONSTER_VITALITY: u32 = 40;

    pub fn new() -> Self {
        Self {
            hero_vitality: Self::DEFAULT_HERO_VITALITY,
            monster_vitality: Self::DEFAULT_MONSTER_VITALITY,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
