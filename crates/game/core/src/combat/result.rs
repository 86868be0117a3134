//! Combat result types.

/// Result of one resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Power of the attack source that was used.
    pub power: u32,

    /// Damage actually dealt (capped by the target's remaining vitality).
    pub damage_dealt: u32,

    /// Target vitality after the attack.
    pub remaining_vitality: u32,

    /// Whether the attack reduced the target to zero vitality.
    pub target_defeated: bool,
}
