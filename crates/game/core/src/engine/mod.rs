//! Encounter engine.
//!
//! All state mutation flows through [`GameEngine::execute`], which drives
//! each action through the validate → apply pipeline and wraps per-action
//! errors into one [`ExecuteError`].

use crate::action::{Action, ActionTransition, AttackError, EscapeError};
use crate::combat::AttackResult;
use crate::error::{ErrorSeverity, GameError};
use crate::gear::GearOracle;
use crate::state::EncounterState;

/// Read-only environment available to action transitions.
///
/// Gear definitions live outside the encounter state; the env hands actions
/// a borrowed oracle without the state ever owning content.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    pub gear: &'a dyn GearOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(gear: &'a dyn GearOracle) -> Self {
        Self { gear }
    }
}

/// Error from executing an action, tagged by action variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("attack failed: {0}")]
    Attack(#[from] AttackError),

    #[error("escape failed: {0}")]
    Escape(#[from] EscapeError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Attack(error) => error.severity(),
            Self::Escape(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Attack(error) => error.error_code(),
            Self::Escape(error) => error.error_code(),
        }
    }
}

/// Successful outcome of an executed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Attack(AttackResult),
    Escape,
}

/// Executes a transition through the two-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the encounter state and return the result
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut EncounterState,
    env: &GameEnv<'_>,
) -> Result<T::Result, T::Error>
where
    T: ActionTransition,
{
    transition.pre_validate(state, env)?;
    transition.apply(state, env)
}

/// Owns the encounter state and executes actions against it.
pub struct GameEngine {
    state: EncounterState,
}

impl GameEngine {
    /// Creates an engine around an initial encounter state.
    pub fn new(state: EncounterState) -> Self {
        Self { state }
    }

    /// Read access to the current state.
    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    /// Consumes the engine, returning the final state.
    pub fn into_state(self) -> EncounterState {
        self.state
    }

    /// Executes an action through the transition pipeline.
    ///
    /// A failed action leaves the state untouched: validation runs before
    /// any mutation, and `apply` mutates only on its success path.
    pub fn execute(
        &mut self,
        action: &Action,
        env: &GameEnv<'_>,
    ) -> Result<ActionResult, ExecuteError> {
        match action {
            Action::Attack(transition) => {
                let result = drive_transition(transition, &mut self.state, env)?;
                Ok(ActionResult::Attack(result))
            }
            Action::Escape(transition) => {
                drive_transition(transition, &mut self.state, env)?;
                Ok(ActionResult::Escape)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{GearDefinition, GearHandle, GearKind, WeaponData};
    use crate::state::{EntityId, EntityState, Equipment};

    struct FixedOracle(Vec<GearDefinition>);

    impl GearOracle for FixedOracle {
        fn definition(&self, handle: GearHandle) -> Option<GearDefinition> {
            self.0.iter().copied().find(|def| def.handle == handle)
        }

        fn all_definitions(&self) -> Vec<GearDefinition> {
            self.0.clone()
        }
    }

    fn engine() -> (GameEngine, FixedOracle) {
        let oracle = FixedOracle(vec![GearDefinition::new(
            GearHandle(1),
            GearKind::Weapon(WeaponData::new(25)),
        )]);

        let mut state = EncounterState::new();
        state
            .spawn(EntityState::hero(
                100,
                Equipment::builder().with(GearHandle(1)).build(),
            ))
            .unwrap();
        state
            .spawn(EntityState::monster(EntityId(1), 40, Equipment::empty()))
            .unwrap();

        (GameEngine::new(state), oracle)
    }

    #[test]
    fn execute_routes_attack_to_result() {
        let (mut engine, oracle) = engine();
        let env = GameEnv::new(&oracle);

        let result = engine
            .execute(&Action::attack(EntityId::HERO, EntityId(1)), &env)
            .unwrap();

        match result {
            ActionResult::Attack(attack) => {
                assert_eq!(attack.damage_dealt, 25);
                assert_eq!(attack.remaining_vitality, 15);
            }
            other => panic!("expected attack result, got {other:?}"),
        }
    }

    #[test]
    fn failed_action_leaves_state_untouched() {
        let (mut engine, oracle) = engine();
        let env = GameEnv::new(&oracle);
        let before = engine.state().clone();

        let err = engine
            .execute(&Action::attack(EntityId(1), EntityId::HERO), &env)
            .unwrap_err();

        assert_eq!(
            err,
            ExecuteError::Attack(AttackError::NoAttackSource(EntityId(1)))
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn repeated_execution_is_deterministic() {
        let script = [
            Action::attack(EntityId::HERO, EntityId(1)),
            Action::attack(EntityId::HERO, EntityId(1)),
            Action::escape(EntityId::HERO),
        ];

        let run = || {
            let (mut engine, oracle) = engine();
            let env = GameEnv::new(&oracle);
            for action in &script {
                engine.execute(action, &env).unwrap();
            }
            engine.into_state()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn second_blow_defeats_the_monster() {
        let (mut engine, oracle) = engine();
        let env = GameEnv::new(&oracle);
        let attack = Action::attack(EntityId::HERO, EntityId(1));

        engine.execute(&attack, &env).unwrap();
        let result = engine.execute(&attack, &env).unwrap();

        match result {
            ActionResult::Attack(second) => {
                // 40 - 25 leaves 15; the second 25-power blow deals only 15.
                assert_eq!(second.damage_dealt, 15);
                assert!(second.target_defeated);
            }
            other => panic!("expected attack result, got {other:?}"),
        }
        assert!(!engine.state().has_active_monsters());
    }
}
