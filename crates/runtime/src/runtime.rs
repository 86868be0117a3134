//! High-level encounter orchestrator.
//!
//! The runtime owns the engine and the gear oracle, wires providers to
//! turns, and exposes a builder-based API for clients to drive encounters.

use tokio::sync::broadcast;

use skirmish_content::GearCatalog;
use skirmish_core::{
    Action, ActionResult, EncounterState, EntityId, EntityKind, GameEngine, GameEnv, GameError,
    GearOracle,
};

use crate::api::{ActionProvider, GameEvent, ProviderKind, Result, RuntimeError};

/// Terminal outcome of one encounter, seen from the hero's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Every monster is defeated or has fled.
    HeroVictory,
    /// The hero dropped to zero vitality.
    HeroDefeated,
    /// The hero escaped the encounter.
    HeroEscaped,
    /// The step budget ran out with both sides still standing.
    Stalemate,
}

/// Main runtime that orchestrates one encounter.
///
/// Design: the runtime owns the engine and decides turn order; injected
/// [`ActionProvider`]s decide what each entity does with its turn.
pub struct Runtime {
    engine: GameEngine,
    gear: Box<dyn GearOracle>,

    // Action providers (injected by user)
    hero_provider: Option<Box<dyn ActionProvider>>,
    monster_provider: Option<Box<dyn ActionProvider>>,

    events: broadcast::Sender<GameEvent>,
    last_actor: Option<EntityId>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Subscribe to game events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Read access to the current encounter state.
    pub fn state(&self) -> &EncounterState {
        self.engine.state()
    }

    /// Computes the terminal outcome, if the encounter has reached one.
    pub fn outcome(&self) -> Option<EncounterOutcome> {
        let hero = self.engine.state().hero()?;
        if !hero.is_alive() {
            return Some(EncounterOutcome::HeroDefeated);
        }
        if hero.has_fled() {
            return Some(EncounterOutcome::HeroEscaped);
        }
        if !self.engine.state().has_active_monsters() {
            return Some(EncounterOutcome::HeroVictory);
        }
        None
    }

    /// Execute a single turn.
    ///
    /// Picks the next active entity in spawn order, asks the matching
    /// provider for an action, and executes it. Recoverable engine errors
    /// (an entity with nothing to attack with) waste the turn instead of
    /// aborting the encounter.
    pub async fn step(&mut self) -> Result<()> {
        if self.engine.state().hero().is_none() {
            return Err(RuntimeError::MissingHero);
        }
        if let Some(outcome) = self.outcome() {
            return Err(RuntimeError::EncounterOver(outcome));
        }

        let (actor, kind) = self.next_actor()?;
        let provider = match kind {
            EntityKind::Hero => self
                .hero_provider
                .as_ref()
                .ok_or(RuntimeError::ProviderNotSet {
                    kind: ProviderKind::Hero,
                })?,
            EntityKind::Monster => {
                self.monster_provider
                    .as_ref()
                    .ok_or(RuntimeError::ProviderNotSet {
                        kind: ProviderKind::Monster,
                    })?
            }
        };

        let action = provider.provide_action(actor, self.engine.state()).await?;
        tracing::debug!(%actor, ?action, "executing action");

        let env = GameEnv::new(self.gear.as_ref());
        self.last_actor = Some(actor);

        match self.engine.execute(&action, &env) {
            Ok(result) => self.publish(actor, action, result),
            Err(error) if error.severity().is_recoverable() => {
                tracing::warn!(%actor, %error, code = error.error_code(), "turn wasted");
            }
            Err(error) => return Err(error.into()),
        }

        if let Some(outcome) = self.outcome() {
            tracing::info!(?outcome, "encounter over");
            let _ = self.events.send(GameEvent::EncounterOver { outcome });
        }

        Ok(())
    }

    /// Run turns until the encounter ends or the step budget is exhausted.
    pub async fn run_to_completion(&mut self, max_steps: usize) -> Result<EncounterOutcome> {
        for _ in 0..max_steps {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.step().await?;
        }

        Ok(self.outcome().unwrap_or(EncounterOutcome::Stalemate))
    }

    /// Picks the next active entity after `last_actor` in spawn order.
    fn next_actor(&self) -> Result<(EntityId, EntityKind)> {
        let state = self.engine.state();
        let active: Vec<(EntityId, EntityKind)> = state
            .active_entities()
            .map(|entity| (entity.id, entity.kind))
            .collect();

        let next = self
            .last_actor
            .and_then(|last| active.iter().find(|(id, _)| *id > last))
            .or_else(|| active.first())
            .copied()
            .ok_or(RuntimeError::EncounterOver(EncounterOutcome::Stalemate))?;

        Ok(next)
    }

    fn publish(&self, actor: EntityId, action: Action, result: ActionResult) {
        let _ = self.events.send(GameEvent::ActionExecuted { actor, action });

        match (action, result) {
            (Action::Attack(attack), ActionResult::Attack(result)) => {
                tracing::info!(
                    %actor,
                    target = %attack.target,
                    damage = result.damage_dealt,
                    remaining = result.remaining_vitality,
                    "attack landed"
                );
                let _ = self.events.send(GameEvent::AttackLanded {
                    actor,
                    target: attack.target,
                    result,
                });
                if result.target_defeated {
                    let _ = self.events.send(GameEvent::EntityDefeated {
                        entity: attack.target,
                    });
                }
            }
            (Action::Escape(_), ActionResult::Escape) => {
                tracing::info!(%actor, "entity fled");
                let _ = self.events.send(GameEvent::EntityFled { entity: actor });
            }
            // Engine pairs each action variant with its own result variant.
            _ => {}
        }
    }
}

/// Builder wiring state, content, and providers into a [`Runtime`].
pub struct RuntimeBuilder {
    state: EncounterState,
    gear: Option<Box<dyn GearOracle>>,
    hero_provider: Option<Box<dyn ActionProvider>>,
    monster_provider: Option<Box<dyn ActionProvider>>,
    event_buffer_size: usize,
}

impl RuntimeBuilder {
    const DEFAULT_EVENT_BUFFER: usize = 100;

    pub fn new() -> Self {
        Self {
            state: EncounterState::new(),
            gear: None,
            hero_provider: None,
            monster_provider: None,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER,
        }
    }

    /// Sets the initial encounter state.
    pub fn state(mut self, state: EncounterState) -> Self {
        self.state = state;
        self
    }

    /// Sets the gear oracle. Defaults to [`GearCatalog::builtin`].
    pub fn gear(mut self, gear: impl GearOracle + 'static) -> Self {
        self.gear = Some(Box::new(gear));
        self
    }

    /// Sets the hero action provider.
    pub fn hero_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.hero_provider = Some(Box::new(provider));
        self
    }

    /// Sets the monster action provider.
    pub fn monster_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.monster_provider = Some(Box::new(provider));
        self
    }

    /// Sets the event channel capacity.
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = size;
        self
    }

    /// Builds the runtime.
    pub fn build(self) -> Runtime {
        let (events, _) = broadcast::channel(self.event_buffer_size);

        Runtime {
            engine: GameEngine::new(self.state),
            gear: self
                .gear
                .unwrap_or_else(|| Box::new(GearCatalog::builtin())),
            hero_provider: self.hero_provider,
            monster_provider: self.monster_provider,
            events,
            last_actor: None,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
