//! Content loaders for reading gear data from files.
//!
//! This module provides loaders that convert RON/TOML files into oracle
//! implementations and configuration values.

pub mod config;
pub mod gear;

pub use config::ConfigLoader;
pub use gear::GearLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
