//! Scenario loader.

use std::path::Path;

use game_core::{Catalogue, GameState, ScenarioSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for starting scenarios.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario definition from a RON file without resolving names.
    pub fn load_spec(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse scenario RON {}: {}", path.display(), e)
        })
    }

    /// Load a scenario and build its initial state against `catalogue`.
    pub fn load(path: &Path, catalogue: &Catalogue) -> LoadResult<GameState> {
        let spec = Self::load_spec(path)?;
        spec.build(catalogue)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }
}
