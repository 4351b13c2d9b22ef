//! Name-addressed catalogue definitions as they appear in content files.
//!
//! Content refers to prerequisites by blessing key; [`super::Catalogue::compile`]
//! resolves those keys into ids and validates uniqueness.
use super::{Effect, ImprovementCategory, ProjectCategory};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogueSpec {
    pub blessings: Vec<BlessingSpec>,
    pub improvements: Vec<ImprovementSpec>,
    pub projects: Vec<ProjectSpec>,
    pub unit_plans: Vec<UnitPlanSpec>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlessingSpec {
    pub key: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImprovementSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub category: ImprovementCategory,
    pub cost: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_tier"))]
    pub tier: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Effect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub category: ProjectCategory,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPlanSpec {
    pub name: String,
    pub power: f64,
    pub max_health: f64,
    pub total_stamina: u32,
    pub cost: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub can_settle: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heals: bool,
}

#[cfg(feature = "serde")]
fn default_tier() -> u8 {
    1
}
