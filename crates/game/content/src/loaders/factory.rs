//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use game_core::{Catalogue, GameConfig, GameState};

use crate::loaders::{CatalogueLoader, ConfigLoader, LoadResult, ScenarioLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalogue.ron
/// └── scenarios/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load and compile the catalogue from `catalogue.ron`.
    pub fn load_catalogue(&self) -> LoadResult<Catalogue> {
        let path = self.data_dir.join("catalogue.ron");
        CatalogueLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron` and build its state.
    pub fn load_scenario(&self, name: &str, catalogue: &Catalogue) -> LoadResult<GameState> {
        let path = self.scenario_path(name);
        ScenarioLoader::load(&path, catalogue)
    }

    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("scenarios").join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
