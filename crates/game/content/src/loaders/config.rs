//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::AiTuning;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("fog_of_war = false\n[ai]\nharvest_boundary = 4.0\n")
            .expect("config parses");

        assert!(!config.fog_of_war);
        assert_eq!(config.ai.harvest_boundary, 4.0);
        assert_eq!(config.ai.rescue_satisfaction, AiTuning::DEFAULT_RESCUE_SATISFACTION);
        assert_eq!(config.ai.settler_levels.neutral, 5);
        assert_eq!(
            config.ai.defensive_garrison_limit,
            AiTuning::DEFAULT_DEFENSIVE_GARRISON_LIMIT
        );
    }

    #[test]
    fn buyout_multiple_is_tunable() {
        let config = ConfigLoader::parse("[ai]\nbuyout_wealth_multiple = 3.5\n")
            .expect("config parses");
        assert_eq!(config.ai.buyout_wealth_multiple, 3.5);
    }
}
