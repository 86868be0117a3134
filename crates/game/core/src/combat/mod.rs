//! Combat resolution.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and side-effect free beyond the target
//! meter passed in.
//!
//! # Architecture
//!
//! - **Capability trait**: [`Attackable`] exposes a power value; anything
//!   power-bearing can attack through the same free function
//! - **Pure functions**: [`apply_attack`] and [`select_attack_source`] carry
//!   no hidden state
//! - **Used by actions**: `AttackAction` composes selection and application
//!
//! # Core Functions
//!
//! - `select_attack_source`: filter equipment for an attack-capable facet
//! - `apply_attack`: vitality reduction, clamped at zero

pub mod attackable;
pub mod result;
pub mod select;

pub use attackable::{Attackable, apply_attack};
pub use result::AttackResult;
pub use select::{SelectError, select_attack_source};
