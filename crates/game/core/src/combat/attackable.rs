//! The attack capability and its application.

use crate::gear::WeaponData;
use crate::state::VitalityMeter;

use super::result::AttackResult;

/// Capability of dealing power-based damage.
///
/// Decoupled from the entity hierarchy: it is gear, not entities, that
/// attacks. Any type exposing a power value gains combat behavior through
/// [`apply_attack`] rather than through inheritance.
pub trait Attackable {
    /// Offensive power of this attack source.
    fn power(&self) -> u32;
}

impl Attackable for WeaponData {
    fn power(&self) -> u32 {
        self.power
    }
}

/// Applies an attack to a target vitality meter.
///
/// Reduces the target's vitality by the attacker's power, clamped at zero.
///
/// # Returns
///
/// Complete attack result: the power used, the damage actually dealt
/// (smaller than power when the target had less vitality left), the
/// target's remaining vitality, and whether the target was defeated.
pub fn apply_attack(attacker: &(impl Attackable + ?Sized), target: &mut VitalityMeter) -> AttackResult {
    let power = attacker.power();
    let damage_dealt = target.apply_damage(power);

    AttackResult {
        power,
        damage_dealt,
        remaining_vitality: target.current(),
        target_defeated: target.is_depleted(),
    }
}
