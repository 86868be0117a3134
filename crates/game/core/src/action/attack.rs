//! Attack action.
//!
//! An entity does not attack with its own body: it delegates to whichever
//! equipped gear satisfies the attack capability. Selection and application
//! are the pure functions in [`crate::combat`]; this action wires them to
//! encounter state with full validation.

use crate::combat::{AttackResult, SelectError, apply_attack, select_attack_source};
use crate::engine::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::gear::GearHandle;
use crate::state::{EncounterState, EntityId};

use super::ActionTransition;

/// Offensive action against a target entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: EntityId,
    pub target: EntityId,
}

impl AttackAction {
    pub fn new(actor: EntityId, target: EntityId) -> Self {
        Self { actor, target }
    }
}

/// Reasons an attack is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("attacker {0} does not exist in this encounter")]
    UnknownActor(EntityId),

    #[error("target {0} does not exist in this encounter")]
    UnknownTarget(EntityId),

    #[error("attacker {0} is already defeated")]
    ActorDefeated(EntityId),

    #[error("attacker {0} has fled the encounter")]
    ActorFled(EntityId),

    #[error("target {0} is already defeated")]
    TargetDefeated(EntityId),

    #[error("target {0} has fled the encounter")]
    TargetFled(EntityId),

    #[error("entity {0} cannot attack itself")]
    SelfAttack(EntityId),

    /// The actor's equipment yields no attack-capable gear. The encounter
    /// continues; the caller should pick another action.
    #[error("attacker {0} has no attack-capable gear equipped")]
    NoAttackSource(EntityId),

    #[error("attacker {actor} has unresolvable gear {handle:?} equipped")]
    UnknownGear { actor: EntityId, handle: GearHandle },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoAttackSource(_) => ErrorSeverity::Recoverable,
            Self::UnknownActor(_)
            | Self::UnknownTarget(_)
            | Self::ActorDefeated(_)
            | Self::ActorFled(_)
            | Self::TargetDefeated(_)
            | Self::TargetFled(_)
            | Self::SelfAttack(_) => ErrorSeverity::Validation,
            Self::UnknownGear { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "attack.unknown_actor",
            Self::UnknownTarget(_) => "attack.unknown_target",
            Self::ActorDefeated(_) => "attack.actor_defeated",
            Self::ActorFled(_) => "attack.actor_fled",
            Self::TargetDefeated(_) => "attack.target_defeated",
            Self::TargetFled(_) => "attack.target_fled",
            Self::SelfAttack(_) => "attack.self_attack",
            Self::NoAttackSource(_) => "attack.no_attack_source",
            Self::UnknownGear { .. } => "attack.unknown_gear",
        }
    }
}

impl AttackAction {
    fn lift_select_error(&self, error: SelectError) -> AttackError {
        match error {
            SelectError::NoAttackSource => AttackError::NoAttackSource(self.actor),
            SelectError::UnknownGear(handle) => AttackError::UnknownGear {
                actor: self.actor,
                handle,
            },
        }
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;
    type Result = AttackResult;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &EncounterState, _env: &GameEnv<'_>) -> Result<(), AttackError> {
        if self.actor == self.target {
            return Err(AttackError::SelfAttack(self.actor));
        }

        let actor = state
            .entity(self.actor)
            .ok_or(AttackError::UnknownActor(self.actor))?;
        if !actor.is_alive() {
            return Err(AttackError::ActorDefeated(self.actor));
        }
        if actor.has_fled() {
            return Err(AttackError::ActorFled(self.actor));
        }

        let target = state
            .entity(self.target)
            .ok_or(AttackError::UnknownTarget(self.target))?;
        if !target.is_alive() {
            return Err(AttackError::TargetDefeated(self.target));
        }
        if target.has_fled() {
            return Err(AttackError::TargetFled(self.target));
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut EncounterState,
        env: &GameEnv<'_>,
    ) -> Result<AttackResult, AttackError> {
        // Filter equipment by things the actor can attack with.
        let actor = state
            .entity(self.actor)
            .ok_or(AttackError::UnknownActor(self.actor))?;
        let weapon = select_attack_source(&actor.equipment, env.gear)
            .map_err(|error| self.lift_select_error(error))?;

        let target = state
            .entity_mut(self.target)
            .ok_or(AttackError::UnknownTarget(self.target))?;

        Ok(apply_attack(&weapon, &mut target.vitality))
    }
}
