//! The reference content shipped in `data/`, embedded at compile time.

use game_core::{Catalogue, GameConfig};

use crate::loaders::{CatalogueLoader, ConfigLoader, LoadResult};

pub const REFERENCE_CATALOGUE_RON: &str = include_str!("../data/catalogue.ron");
pub const REFERENCE_CONFIG_TOML: &str = include_str!("../data/config.toml");

/// Compiles the embedded reference catalogue.
pub fn reference_catalogue() -> LoadResult<Catalogue> {
    CatalogueLoader::parse(REFERENCE_CATALOGUE_RON)
}

/// Parses the embedded reference configuration.
pub fn reference_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(REFERENCE_CONFIG_TOML)
}
