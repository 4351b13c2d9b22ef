use std::collections::BTreeSet;

use crate::catalogue::BlessingId;
use crate::state::{Position, Settlement, Unit};

/// Player allegiance; each faction bends one or two yields.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    /// Less zeal.
    Agriculturists,
    #[default]
    Capitalists,
    /// Less fortune, but relic investigations always succeed.
    Scrutineers,
    /// More wealth.
    Godless,
    /// More harvest.
    Ravenous,
    /// More zeal.
    Fundamentalists,
    /// More fortune, less wealth.
    Orthodox,
    /// Never founds new settlements; fortifications count double.
    Concentrated,
    Frontiersmen,
    Imperials,
    /// Harvest is unaffected by night.
    Nocturne,
    Infidels,
}

impl Faction {
    pub fn can_settle(self) -> bool {
        self != Faction::Concentrated
    }
}

/// Military posture of a computer-controlled player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackStyle {
    Aggressive,
    Defensive,
    #[default]
    Neutral,
}

/// How eagerly a computer-controlled player founds new settlements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionStyle {
    Expansionist,
    #[default]
    Neutral,
    Hermit,
}

/// The two independent axes that steer a computer-controlled player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playstyle {
    pub attacking: AttackStyle,
    pub expansion: ExpansionStyle,
}

impl Playstyle {
    pub const fn new(attacking: AttackStyle, expansion: ExpansionStyle) -> Self {
        Self {
            attacking,
            expansion,
        }
    }
}

/// The blessing a player is researching and the fortune put into it so far.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OngoingBlessing {
    pub blessing: BlessingId,
    pub fortune_consumed: f64,
}

impl OngoingBlessing {
    pub const fn new(blessing: BlessingId) -> Self {
        Self {
            blessing,
            fortune_consumed: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub faction: Faction,
    pub wealth: f64,
    pub settlements: Vec<Settlement>,
    pub units: Vec<Unit>,
    pub blessings: BTreeSet<BlessingId>,
    pub ongoing_blessing: Option<OngoingBlessing>,
    /// `None` for human players.
    pub playstyle: Option<Playstyle>,
    pub quads_seen: BTreeSet<Position>,
}

impl Player {
    pub fn new(name: impl Into<String>, faction: Faction) -> Self {
        Self {
            name: name.into(),
            faction,
            wealth: 0.0,
            settlements: Vec::new(),
            units: Vec::new(),
            blessings: BTreeSet::new(),
            ongoing_blessing: None,
            playstyle: None,
            quads_seen: BTreeSet::new(),
        }
    }

    pub fn with_playstyle(mut self, playstyle: Playstyle) -> Self {
        self.playstyle = Some(playstyle);
        self
    }

    pub fn is_ai(&self) -> bool {
        self.playstyle.is_some()
    }

    pub fn has_blessing(&self, blessing: BlessingId) -> bool {
        self.blessings.contains(&blessing)
    }

    /// Starts research on `blessing` from zero progress.
    pub fn begin_blessing(&mut self, blessing: BlessingId) {
        self.ongoing_blessing = Some(OngoingBlessing::new(blessing));
    }

    /// Deployed units plus every settlement's garrison.
    pub fn all_units(&self) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .chain(self.settlements.iter().flat_map(|s| s.garrison.iter()))
    }
}
