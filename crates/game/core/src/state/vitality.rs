//! Bounded vitality tracking.
//!
//! Vitality is the single stored resource in this model. The meter owns the
//! `0 <= current <= max` invariant: every mutator clamps, so no caller can
//! drive vitality negative or above its maximum.

/// Current and maximum vitality for one entity.
///
/// # Invariants
///
/// - `current <= max` at all times
/// - Mutation goes through [`set`](Self::set), [`apply_damage`](Self::apply_damage)
///   and [`heal`](Self::heal), which all clamp into `[0, max]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalityMeter {
    current: u32,
    max: u32,
}

impl VitalityMeter {
    /// Creates a meter with the given current value, clamped into `[0, max]`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Creates a meter filled to its maximum.
    pub const fn at_max(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Current vitality.
    #[inline]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Maximum vitality.
    #[inline]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Sets current vitality, clamped into `[0, max]`.
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.max);
    }

    /// Reduces current vitality, flooring at zero.
    ///
    /// Returns the damage actually dealt, which is smaller than `amount`
    /// when the meter runs out (a hit for 12 against 5 remaining deals 5).
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.current);
        self.current -= dealt;
        dealt
    }

    /// Restores current vitality, capped at `max`.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }

    /// Returns true if vitality has reached zero.
    #[inline]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Returns true if any vitality remains.
    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.current > 0
    }
}
