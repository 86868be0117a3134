//! Public runtime surface: providers, events, and errors.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use skirmish_core::{Action, AttackResult, EncounterState, EntityId, ExecuteError};

use crate::runtime::EncounterOutcome;

/// Result alias used across the runtime.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Which side a provider produces actions for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Hero,
    Monster,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Monster => write!(f, "monster"),
        }
    }
}

/// Errors surfaced by the runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("no {kind} action provider configured")]
    ProviderNotSet { kind: ProviderKind },

    #[error("encounter state has no hero entity")]
    MissingHero,

    #[error("provider has no action left for {entity}")]
    ScriptExhausted { entity: EntityId },

    #[error("encounter is already over: {0:?}")]
    EncounterOver(EncounterOutcome),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

/// Events broadcast to runtime subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An action was executed successfully.
    ActionExecuted { actor: EntityId, action: Action },

    /// An attack landed; carries the resolved result.
    AttackLanded {
        actor: EntityId,
        target: EntityId,
        result: AttackResult,
    },

    /// An entity dropped to zero vitality.
    EntityDefeated { entity: EntityId },

    /// An entity escaped the encounter.
    EntityFled { entity: EntityId },

    /// The encounter reached a terminal outcome.
    EncounterOver { outcome: EncounterOutcome },
}

/// Supplies the next action for an entity.
///
/// Implementations decide *what* happens each turn; the runtime decides
/// *when* and applies the result through the engine.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    async fn provide_action(&self, entity: EntityId, state: &EncounterState) -> Result<Action>;
}

/// Provider that replays a fixed action queue. Used in tests and demos.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Action>>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ActionProvider for ScriptedProvider {
    async fn provide_action(&self, entity: EntityId, _state: &EncounterState) -> Result<Action> {
        self.script
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::ScriptExhausted { entity })
    }
}

/// Provider that always attacks the hero. Stand-in monster brain.
pub struct AttackHeroProvider;

#[async_trait]
impl ActionProvider for AttackHeroProvider {
    async fn provide_action(&self, entity: EntityId, _state: &EncounterState) -> Result<Action> {
        Ok(Action::attack(entity, EntityId::HERO))
    }
}
