//! Data-driven content definitions and loaders.
//!
//! This crate houses static gear content and provides loaders for RON/TOML
//! data files:
//! - Gear catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in encounter
//! state. All loaders use skirmish-core types directly with serde for
//! deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::GearCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, GearLoader};
