//! Catalogue loader.

use std::path::Path;

use game_core::{Catalogue, CatalogueSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for the blessing/improvement/project/unit-plan catalogue.
pub struct CatalogueLoader;

impl CatalogueLoader {
    /// Load and compile a catalogue from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a `CatalogueSpec`
    pub fn load(path: &Path) -> LoadResult<Catalogue> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalogue {}: {}", path.display(), e))
    }

    /// Parse and compile a catalogue from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalogue> {
        let spec: CatalogueSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalogue RON: {}", e))?;

        Ok(Catalogue::compile(spec)?)
    }
}
