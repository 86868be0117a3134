//! Gear catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::GearDefinition;

use crate::catalog::GearCatalog;
use crate::loaders::{LoadResult, read_file};

/// Gear catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearCatalogFile {
    pub gear: Vec<GearDefinition>,
}

/// Loader for gear catalogs from RON files.
pub struct GearLoader;

impl GearLoader {
    /// Load a gear catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a GearCatalogFile
    ///
    /// # Returns
    ///
    /// Returns a GearCatalog ready to serve as the gear oracle.
    pub fn load(path: &Path) -> LoadResult<GearCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a gear catalog from a RON string.
    pub fn parse(content: &str) -> LoadResult<GearCatalog> {
        let file: GearCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gear catalog RON: {}", e))?;

        Ok(GearCatalog::new(file.gear))
    }
}
