//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Catalogue of blessings, improvements, projects and unit plans (RON)
//! - Starting scenarios (RON)
//! - Game configuration (TOML)
//!
//! The reference catalogue is also embedded so tests and tools can use it
//! without touching the filesystem.
//!
//! All loaders deserialize into game-core types through serde.

#[cfg(feature = "loaders")]
pub mod loaders;
#[cfg(feature = "loaders")]
pub mod reference;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogueLoader, ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
#[cfg(feature = "loaders")]
pub use reference::{
    REFERENCE_CATALOGUE_RON, REFERENCE_CONFIG_TOML, reference_catalogue, reference_config,
};
