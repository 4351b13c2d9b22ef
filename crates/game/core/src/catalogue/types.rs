//! Catalogue entry types.
//!
//! Entries are immutable once compiled into a [`super::Catalogue`]. Units copy
//! their [`UnitPlan`] on creation so relic rewards can modify a single unit.
use super::BlessingId;

/// Flat modifiers an improvement applies to the settlement that built it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Effect {
    pub wealth: i32,
    pub harvest: i32,
    pub zeal: i32,
    pub fortune: i32,
    pub satisfaction: i32,
    pub strength: i32,
}

impl Effect {
    pub const NONE: Self = Self {
        wealth: 0,
        harvest: 0,
        zeal: 0,
        fortune: 0,
        satisfaction: 0,
        strength: 0,
    };
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImprovementCategory {
    Industrial,
    Economical,
    Bountiful,
    Magical,
    Intimidatory,
    Panem,
}

/// Kinds of project; each converts a quarter of a settlement's zeal into
/// another resource while it is being worked on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProjectCategory {
    Bountiful,
    Economical,
    Magical,
}

/// A player-wide research unlock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blessing {
    /// Stable short key used by content files and saves.
    pub key: String,
    pub name: String,
    pub description: String,
    /// Fortune needed to complete the blessing.
    pub cost: f64,
}

/// A building a settlement may construct once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    pub name: String,
    pub description: String,
    pub category: ImprovementCategory,
    /// Zeal needed to finish construction.
    pub cost: f64,
    /// Coarse progression band; 1 is buildable from the start.
    pub tier: u8,
    pub effect: Effect,
    pub prerequisite: Option<BlessingId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub name: String,
    pub description: String,
    pub category: ProjectCategory,
}

/// Blueprint a settlement trains units from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPlan {
    pub name: String,
    /// Attack strength, or healing proficiency for healers.
    pub power: f64,
    pub max_health: f64,
    /// Tiles the unit may move per turn.
    pub total_stamina: u32,
    /// Zeal to train; doubles as the per-turn upkeep in wealth.
    pub cost: f64,
    pub prerequisite: Option<BlessingId>,
    pub can_settle: bool,
    pub heals: bool,
}

impl UnitPlan {
    /// Units that count toward a garrison's fighting strength.
    pub fn is_fighter(&self) -> bool {
        !self.heals && !self.can_settle
    }
}
