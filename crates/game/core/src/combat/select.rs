//! Attack-source selection.
//!
//! "Filter equipment by things I can attack with" as an explicit operation:
//! resolve each equipped handle through the gear oracle, keep the weapons,
//! and pick one deterministically.

use crate::error::{ErrorSeverity, GameError};
use crate::gear::{GearHandle, GearOracle, WeaponData};
use crate::state::Equipment;

/// Error selecting an attack source from equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// No equipped gear satisfies the attack capability.
    #[error("equipment yields no attack-capable gear")]
    NoAttackSource,

    /// An equipped handle has no definition in the oracle. Content bug.
    #[error("equipped gear {0:?} has no definition")]
    UnknownGear(GearHandle),
}

impl GameError for SelectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoAttackSource => ErrorSeverity::Recoverable,
            Self::UnknownGear(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoAttackSource => "select.no_attack_source",
            Self::UnknownGear(_) => "select.unknown_gear",
        }
    }
}

/// Selects the attack source from an entity's equipment.
///
/// # Policy
///
/// Among equipped gear whose definition is a weapon, the highest power wins;
/// the earliest slot wins ties. Armor and trinkets are ignored. The selection
/// is deterministic and stable under re-ordering of non-weapon gear.
///
/// # Errors
///
/// - [`SelectError::NoAttackSource`] when no equipped gear is a weapon
///   (including empty equipment)
/// - [`SelectError::UnknownGear`] when a handle cannot be resolved
pub fn select_attack_source(
    equipment: &Equipment,
    gear: &(impl GearOracle + ?Sized),
) -> Result<WeaponData, SelectError> {
    let mut best: Option<WeaponData> = None;

    for handle in equipment.iter() {
        let definition = gear
            .definition(handle)
            .ok_or(SelectError::UnknownGear(handle))?;

        if let Some(weapon) = definition.as_weapon() {
            // Strict comparison keeps the earliest slot on ties.
            if best.is_none_or(|current| weapon.power > current.power) {
                best = Some(weapon);
            }
        }
    }

    best.ok_or(SelectError::NoAttackSource)
}
