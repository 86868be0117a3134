//! Escape action.

use crate::engine::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EncounterState, EntityId};

use super::ActionTransition;

/// Leave the encounter. A fled entity can no longer act or be targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeAction {
    pub actor: EntityId,
}

impl EscapeAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

/// Reasons an escape is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EscapeError {
    #[error("entity {0} does not exist in this encounter")]
    UnknownActor(EntityId),

    #[error("entity {0} is already defeated")]
    ActorDefeated(EntityId),

    #[error("entity {0} has already fled")]
    AlreadyFled(EntityId),
}

impl GameError for EscapeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "escape.unknown_actor",
            Self::ActorDefeated(_) => "escape.actor_defeated",
            Self::AlreadyFled(_) => "escape.already_fled",
        }
    }
}

impl ActionTransition for EscapeAction {
    type Error = EscapeError;
    type Result = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &EncounterState, _env: &GameEnv<'_>) -> Result<(), EscapeError> {
        let actor = state
            .entity(self.actor)
            .ok_or(EscapeError::UnknownActor(self.actor))?;
        if !actor.is_alive() {
            return Err(EscapeError::ActorDefeated(self.actor));
        }
        if actor.has_fled() {
            return Err(EscapeError::AlreadyFled(self.actor));
        }
        Ok(())
    }

    fn apply(&self, state: &mut EncounterState, _env: &GameEnv<'_>) -> Result<(), EscapeError> {
        let actor = state
            .entity_mut(self.actor)
            .ok_or(EscapeError::UnknownActor(self.actor))?;
        actor.fled = true;
        Ok(())
    }
}
