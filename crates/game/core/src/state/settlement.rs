use crate::catalogue::{ImprovementId, ProjectId, UnitPlanId};
use crate::state::{Position, Unit};

/// What a settlement is currently building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionTarget {
    Improvement(ImprovementId),
    Project(ProjectId),
    UnitPlan(UnitPlanId),
}

/// A construction target together with the zeal already invested in it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Construction {
    pub target: ConstructionTarget,
    pub zeal_consumed: f64,
}

impl Construction {
    pub const fn new(target: ConstructionTarget) -> Self {
        Self {
            target,
            zeal_consumed: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EconomicStatus {
    Recession,
    #[default]
    Standard,
    Boom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarvestStatus {
    Poor,
    #[default]
    Standard,
    Plentiful,
}

/// A settlement owned by a player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    pub name: String,
    pub location: Position,
    /// Board positions this settlement works.
    pub quads: Vec<Position>,
    /// Built improvements in build order.
    pub improvements: Vec<ImprovementId>,
    pub current_work: Option<Construction>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "checked::satisfaction"))]
    satisfaction: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "checked::level"))]
    level: u8,
    pub garrison: Vec<Unit>,
    /// Defensive strength; fortifying improvements raise it and its maximum.
    pub strength: f64,
    pub max_strength: f64,
    pub produced_settler: bool,
    pub besieged: bool,
    pub economic_status: EconomicStatus,
    pub harvest_status: HarvestStatus,
}

impl Settlement {
    pub const MIN_SATISFACTION: f64 = 0.0;
    pub const MAX_SATISFACTION: f64 = 100.0;
    pub const DEFAULT_SATISFACTION: f64 = 50.0;
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 10;
    pub const DEFAULT_STRENGTH: f64 = 100.0;

    /// Creates a level 1 settlement working the given quads.
    pub fn new(name: impl Into<String>, location: Position, quads: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            location,
            quads,
            improvements: Vec::new(),
            current_work: None,
            satisfaction: Self::DEFAULT_SATISFACTION,
            level: Self::MIN_LEVEL,
            garrison: Vec::new(),
            strength: Self::DEFAULT_STRENGTH,
            max_strength: Self::DEFAULT_STRENGTH,
            produced_settler: false,
            besieged: false,
            economic_status: EconomicStatus::default(),
            harvest_status: HarvestStatus::default(),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.raise_level(level);
        self
    }

    pub fn with_satisfaction(mut self, satisfaction: f64) -> Self {
        self.set_satisfaction(satisfaction);
        self
    }

    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    /// Stores satisfaction clamped to its valid range.
    pub fn set_satisfaction(&mut self, satisfaction: f64) {
        self.satisfaction = satisfaction.clamp(Self::MIN_SATISFACTION, Self::MAX_SATISFACTION);
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Raises the level; lower values are ignored since levels never drop.
    pub fn raise_level(&mut self, level: u8) {
        let level = level.clamp(Self::MIN_LEVEL, Self::MAX_LEVEL);
        if level > self.level {
            self.level = level;
        }
    }

    /// Shifts satisfaction by `delta`, staying within range.
    pub fn adjust_satisfaction(&mut self, delta: f64) {
        self.set_satisfaction(self.satisfaction + delta);
    }

    pub fn has_improvement(&self, id: ImprovementId) -> bool {
        self.improvements.contains(&id)
    }

    /// Replaces the current construction, discarding any progress.
    pub fn set_current_work(&mut self, target: ConstructionTarget) {
        self.current_work = Some(Construction::new(target));
    }

    pub fn current_target(&self) -> Option<ConstructionTarget> {
        self.current_work.map(|work| work.target)
    }

    /// Whether the settlement is currently building `target`.
    pub fn is_working_on(&self, target: ConstructionTarget) -> bool {
        self.current_target() == Some(target)
    }
}

/// Loaded values are forced back into range so saves cannot break the
/// satisfaction and level bounds.
#[cfg(feature = "serde")]
mod checked {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use super::Settlement;

    pub fn satisfaction<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if value.is_nan() {
            return Err(D::Error::custom("satisfaction must be a number"));
        }
        Ok(value.clamp(Settlement::MIN_SATISFACTION, Settlement::MAX_SATISFACTION))
    }

    pub fn level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Ok(value.clamp(Settlement::MIN_LEVEL, Settlement::MAX_LEVEL))
    }
}
