//! Deterministic encounter logic and data types shared across clients.
//!
//! `skirmish-core` defines the canonical rules (entities, gear, combat,
//! actions) and exposes pure APIs that can be reused by both the runtime and
//! offline tools. All state mutation flows through [`engine::GameEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod gear;
pub mod state;

pub use action::{Action, ActionTransition, AttackAction, AttackError, EscapeAction, EscapeError};
pub use combat::{Attackable, AttackResult, SelectError, apply_attack, select_attack_source};
pub use config::GameConfig;
pub use engine::{ActionResult, ExecuteError, GameEngine, GameEnv};
pub use error::{ErrorSeverity, GameError};
pub use gear::{ArmorData, GearDefinition, GearHandle, GearKind, GearOracle, WeaponData};
pub use state::{
    EncounterState, EntityId, EntityKind, EntityState, Equipment, EquipmentBuilder, SpawnError,
    VitalityMeter,
};
