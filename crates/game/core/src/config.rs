use crate::state::ExpansionStyle;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// When disabled, vision rewards from relics turn into wealth.
    pub fog_of_war: bool,
    /// Thresholds consumed by the computer-controlled players.
    pub ai: AiTuning,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOG_OF_WAR: bool = true;

    pub fn new() -> Self {
        Self {
            fog_of_war: Self::DEFAULT_FOG_OF_WAR,
            ai: AiTuning::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric thresholds for construction planning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiTuning {
    /// Settlements below this satisfaction look for satisfaction improvements first.
    pub rescue_satisfaction: f64,
    /// Improvements taking more turns than this are considered unaffordable.
    pub construction_turn_ceiling: f64,
    /// Settlements producing less harvest than this prioritise harvest.
    pub harvest_boundary: f64,
    /// Constructions are bought out only when wealth covers this many times the price.
    pub buyout_wealth_multiple: f64,
    /// Defensive players at full strength keep this many units garrisoned.
    pub defensive_garrison_limit: usize,
    pub aggressive: GarrisonTarget,
    pub defensive: GarrisonTarget,
    pub settler_levels: SettlerLevels,
}

impl AiTuning {
    pub const DEFAULT_RESCUE_SATISFACTION: f64 = 50.0;
    pub const DEFAULT_CONSTRUCTION_TURN_CEILING: f64 = 30.0;
    pub const DEFAULT_HARVEST_BOUNDARY: f64 = 10.0;
    pub const DEFAULT_BUYOUT_WEALTH_MULTIPLE: f64 = 2.0;
    pub const DEFAULT_DEFENSIVE_GARRISON_LIMIT: usize = 4;
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            rescue_satisfaction: Self::DEFAULT_RESCUE_SATISFACTION,
            construction_turn_ceiling: Self::DEFAULT_CONSTRUCTION_TURN_CEILING,
            harvest_boundary: Self::DEFAULT_HARVEST_BOUNDARY,
            buyout_wealth_multiple: Self::DEFAULT_BUYOUT_WEALTH_MULTIPLE,
            defensive_garrison_limit: Self::DEFAULT_DEFENSIVE_GARRISON_LIMIT,
            aggressive: GarrisonTarget::AGGRESSIVE,
            defensive: GarrisonTarget::DEFENSIVE,
            settler_levels: SettlerLevels::default(),
        }
    }
}

/// Minimum unit counts a playstyle wants per settlement level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GarrisonTarget {
    pub healers_per_level: f64,
    pub fighters_per_level: f64,
}

impl GarrisonTarget {
    pub const AGGRESSIVE: Self = Self {
        healers_per_level: 0.5,
        fighters_per_level: 1.0,
    };
    pub const DEFENSIVE: Self = Self {
        healers_per_level: 0.6,
        fighters_per_level: 1.5,
    };

    /// Healers wanted by a settlement of the given level (floored).
    pub fn healers(&self, level: u8) -> usize {
        (f64::from(level) * self.healers_per_level).floor() as usize
    }

    /// Non-healer units wanted by a settlement of the given level (floored).
    pub fn fighters(&self, level: u8) -> usize {
        (f64::from(level) * self.fighters_per_level).floor() as usize
    }
}

/// Settlement level at which each expansion playstyle builds its settler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlerLevels {
    pub expansionist: u8,
    pub neutral: u8,
    pub hermit: u8,
}

impl SettlerLevels {
    pub fn for_style(&self, style: ExpansionStyle) -> u8 {
        match style {
            ExpansionStyle::Expansionist => self.expansionist,
            ExpansionStyle::Neutral => self.neutral,
            ExpansionStyle::Hermit => self.hermit,
        }
    }
}

impl Default for SettlerLevels {
    fn default() -> Self {
        Self {
            expansionist: 3,
            neutral: 5,
            hermit: 10,
        }
    }
}
