//! Action domain.
//!
//! Actions are the only way encounter state mutates. Each action variant
//! implements [`ActionTransition`]: validate preconditions against the state
//! before mutation, then apply.
//!
//! # Module Structure
//!
//! - `attack`: AttackAction and AttackError
//! - `escape`: EscapeAction and EscapeError

pub mod attack;
pub mod escape;

pub use attack::{AttackAction, AttackError};
pub use escape::{EscapeAction, EscapeError};

use crate::engine::GameEnv;
use crate::state::{EncounterState, EntityId};

/// Defines how a concrete action variant mutates encounter state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &EncounterState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the encounter state directly.
    fn apply(
        &self,
        state: &mut EncounterState,
        env: &GameEnv<'_>,
    ) -> Result<Self::Result, Self::Error>;
}

/// Top-level action enum covering the two behaviors every entity supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Offensive action against a target entity.
    Attack(AttackAction),

    /// Leave the encounter.
    Escape(EscapeAction),
}

impl Action {
    /// Returns the entity performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Attack(attack) => attack.actor(),
            Action::Escape(escape) => escape.actor(),
        }
    }

    /// Convenience constructor for an attack.
    pub fn attack(actor: EntityId, target: EntityId) -> Self {
        Action::Attack(AttackAction::new(actor, target))
    }

    /// Convenience constructor for an escape.
    pub fn escape(actor: EntityId) -> Self {
        Action::Escape(EscapeAction::new(actor))
    }
}
