use core::fmt;

/// Unique identifier for any entity tracked in the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable hero.
    pub const HERO: Self = Self(0);

    /// Returns true if this entity represents the hero.
    #[inline]
    pub const fn is_hero(self) -> bool {
        self.0 == Self::HERO.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::HERO
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
