//! Async encounter driver.
//!
//! `skirmish-runtime` owns a [`skirmish_core::GameEngine`] plus the content
//! oracles, pulls actions from injected [`ActionProvider`]s, and broadcasts
//! [`GameEvent`]s to subscribers. The core stays pure; everything observable
//! (logging, events, providers) lives here.

pub mod api;
pub mod runtime;

pub use api::{
    ActionProvider, AttackHeroProvider, GameEvent, ProviderKind, Result, RuntimeError,
    ScriptedProvider,
};
pub use runtime::{EncounterOutcome, Runtime, RuntimeBuilder};
