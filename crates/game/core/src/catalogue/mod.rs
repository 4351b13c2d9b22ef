//! Read-only registry of everything a player can research or build.
//!
//! The catalogue is an arena: entries live in vectors in content order and are
//! addressed by dense typed ids. Content order is significant. Every "first
//! candidate wins" rule in the decision engine walks these vectors front to
//! back, so the order in the content file is the tie-break order.
mod error;
mod spec;
mod types;

use std::collections::HashMap;
use std::fmt;

pub use error::CatalogueError;
pub use spec::{BlessingSpec, CatalogueSpec, ImprovementSpec, ProjectSpec, UnitPlanSpec};
pub use types::{
    Blessing, Effect, Improvement, ImprovementCategory, Project, ProjectCategory, UnitPlan,
};

use crate::state::{Player, Settlement};

macro_rules! catalogue_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u16);

        impl $name {
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

catalogue_id!(
    /// Index of a [`Blessing`] in catalogue order.
    BlessingId,
    "blessing"
);
catalogue_id!(
    /// Index of an [`Improvement`] in catalogue order.
    ImprovementId,
    "improvement"
);
catalogue_id!(
    /// Index of a [`Project`] in catalogue order.
    ProjectId,
    "project"
);
catalogue_id!(
    /// Index of a [`UnitPlan`] in catalogue order.
    UnitPlanId,
    "unit_plan"
);

/// Compiled, immutable registry of blessings, improvements, projects and unit plans.
#[derive(Clone, Debug)]
pub struct Catalogue {
    blessings: Vec<Blessing>,
    improvements: Vec<Improvement>,
    projects: Vec<Project>,
    unit_plans: Vec<UnitPlan>,

    blessing_keys: HashMap<String, BlessingId>,
    improvement_names: HashMap<String, ImprovementId>,
    project_names: HashMap<String, ProjectId>,
    unit_plan_names: HashMap<String, UnitPlanId>,
}

impl Catalogue {
    /// Validates a name-addressed definition and resolves prerequisites.
    pub fn compile(spec: CatalogueSpec) -> Result<Self, CatalogueError> {
        if spec.improvements.is_empty() {
            return Err(CatalogueError::EmptySection {
                section: "improvements",
            });
        }
        if spec.unit_plans.is_empty() {
            return Err(CatalogueError::EmptySection {
                section: "unit plans",
            });
        }

        let mut blessing_keys = HashMap::new();
        let mut blessing_names = HashMap::new();
        let mut blessings = Vec::with_capacity(spec.blessings.len());
        for (index, raw) in spec.blessings.into_iter().enumerate() {
            let id = BlessingId(to_index(index, "blessings")?);
            if blessing_keys.insert(raw.key.clone(), id).is_some() {
                return Err(duplicate("blessing", raw.key));
            }
            if blessing_names.insert(raw.name.clone(), id).is_some() {
                return Err(duplicate("blessing", raw.name));
            }
            blessings.push(Blessing {
                key: raw.key,
                name: raw.name,
                description: raw.description,
                cost: raw.cost,
            });
        }

        let resolve = |entry: &str, requires: Option<String>| match requires {
            None => Ok(None),
            Some(key) => blessing_keys.get(&key).copied().map(Some).ok_or_else(|| {
                CatalogueError::UnknownPrerequisite {
                    entry: entry.to_string(),
                    key,
                }
            }),
        };

        let mut improvement_names = HashMap::new();
        let mut improvements = Vec::with_capacity(spec.improvements.len());
        for (index, raw) in spec.improvements.into_iter().enumerate() {
            let id = ImprovementId(to_index(index, "improvements")?);
            if improvement_names.insert(raw.name.clone(), id).is_some() {
                return Err(duplicate("improvement", raw.name));
            }
            let prerequisite = resolve(&raw.name, raw.requires)?;
            improvements.push(Improvement {
                name: raw.name,
                description: raw.description,
                category: raw.category,
                cost: raw.cost,
                tier: raw.tier,
                effect: raw.effect,
                prerequisite,
            });
        }

        let mut project_names = HashMap::new();
        let mut projects = Vec::with_capacity(spec.projects.len());
        for (index, raw) in spec.projects.into_iter().enumerate() {
            let id = ProjectId(to_index(index, "projects")?);
            if project_names.insert(raw.name.clone(), id).is_some() {
                return Err(duplicate("project", raw.name));
            }
            projects.push(Project {
                name: raw.name,
                description: raw.description,
                category: raw.category,
            });
        }

        let mut unit_plan_names = HashMap::new();
        let mut unit_plans = Vec::with_capacity(spec.unit_plans.len());
        for (index, raw) in spec.unit_plans.into_iter().enumerate() {
            let id = UnitPlanId(to_index(index, "unit plans")?);
            if unit_plan_names.insert(raw.name.clone(), id).is_some() {
                return Err(duplicate("unit plan", raw.name));
            }
            let prerequisite = resolve(&raw.name, raw.requires)?;
            unit_plans.push(UnitPlan {
                name: raw.name,
                power: raw.power,
                max_health: raw.max_health,
                total_stamina: raw.total_stamina,
                cost: raw.cost,
                prerequisite,
                can_settle: raw.can_settle,
                heals: raw.heals,
            });
        }

        Ok(Self {
            blessings,
            improvements,
            projects,
            unit_plans,
            blessing_keys,
            improvement_names,
            project_names,
            unit_plan_names,
        })
    }

    // ========================================================================
    // Enumeration (catalogue order)
    // ========================================================================

    pub fn blessings(&self) -> impl Iterator<Item = (BlessingId, &Blessing)> {
        self.blessings
            .iter()
            .enumerate()
            .map(|(i, b)| (BlessingId(i as u16), b))
    }

    pub fn improvements(&self) -> impl Iterator<Item = (ImprovementId, &Improvement)> {
        self.improvements
            .iter()
            .enumerate()
            .map(|(i, imp)| (ImprovementId(i as u16), imp))
    }

    pub fn projects(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| (ProjectId(i as u16), p))
    }

    pub fn unit_plans(&self) -> impl Iterator<Item = (UnitPlanId, &UnitPlan)> {
        self.unit_plans
            .iter()
            .enumerate()
            .map(|(i, plan)| (UnitPlanId(i as u16), plan))
    }

    pub fn blessing_count(&self) -> usize {
        self.blessings.len()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn blessing(&self, id: BlessingId) -> Option<&Blessing> {
        self.blessings.get(id.index())
    }

    pub fn improvement(&self, id: ImprovementId) -> Option<&Improvement> {
        self.improvements.get(id.index())
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.index())
    }

    pub fn unit_plan(&self, id: UnitPlanId) -> Option<&UnitPlan> {
        self.unit_plans.get(id.index())
    }

    pub fn blessing_id(&self, key: &str) -> Option<BlessingId> {
        self.blessing_keys.get(key).copied()
    }

    /// Looks a blessing up by its display name rather than its key.
    pub fn blessing_by_name(&self, name: &str) -> Option<BlessingId> {
        self.blessings().find(|(_, b)| b.name == name).map(|(id, _)| id)
    }

    pub fn improvement_id(&self, name: &str) -> Option<ImprovementId> {
        self.improvement_names.get(name).copied()
    }

    pub fn project_id(&self, name: &str) -> Option<ProjectId> {
        self.project_names.get(name).copied()
    }

    pub fn unit_plan_id(&self, name: &str) -> Option<UnitPlanId> {
        self.unit_plan_names.get(name).copied()
    }

    // ========================================================================
    // Unlock relations
    // ========================================================================

    pub fn unlocked_improvements(
        &self,
        blessing: BlessingId,
    ) -> impl Iterator<Item = (ImprovementId, &Improvement)> {
        self.improvements()
            .filter(move |(_, imp)| imp.prerequisite == Some(blessing))
    }

    pub fn unlocked_unit_plans(
        &self,
        blessing: BlessingId,
    ) -> impl Iterator<Item = (UnitPlanId, &UnitPlan)> {
        self.unit_plans()
            .filter(move |(_, plan)| plan.prerequisite == Some(blessing))
    }

    pub fn unlocks_units(&self, blessing: BlessingId) -> bool {
        self.unlocked_unit_plans(blessing).next().is_some()
    }

    /// True when the blessing unlocks at least one improvement granting strength.
    pub fn unlocks_strength(&self, blessing: BlessingId) -> bool {
        self.unlocked_improvements(blessing)
            .any(|(_, imp)| imp.effect.strength > 0)
    }

    // ========================================================================
    // Availability
    // ========================================================================

    /// Improvements the settlement could start now, in catalogue order.
    ///
    /// An improvement is available once its prerequisite blessing is researched
    /// and the settlement has not already built it.
    pub fn available_improvements(
        &self,
        player: &Player,
        settlement: &Settlement,
    ) -> Vec<ImprovementId> {
        self.improvements()
            .filter(|(id, imp)| {
                prerequisite_met(player, imp.prerequisite) && !settlement.has_improvement(*id)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Unit plans the player may train, in catalogue order.
    pub fn available_unit_plans(&self, player: &Player) -> Vec<UnitPlanId> {
        self.unit_plans()
            .filter(|(_, plan)| prerequisite_met(player, plan.prerequisite))
            .map(|(id, _)| id)
            .collect()
    }

    /// Blessings the player has not researched yet, in catalogue order.
    pub fn unresearched_blessings<'a>(
        &'a self,
        player: &'a Player,
    ) -> impl Iterator<Item = (BlessingId, &'a Blessing)> + 'a {
        self.blessings()
            .filter(move |(id, _)| !player.has_blessing(*id))
    }
}

fn prerequisite_met(player: &Player, prerequisite: Option<BlessingId>) -> bool {
    prerequisite.is_none_or(|blessing| player.has_blessing(blessing))
}

fn to_index(index: usize, section: &'static str) -> Result<u16, CatalogueError> {
    u16::try_from(index).map_err(|_| CatalogueError::TooManyEntries {
        section,
        max: u16::MAX as usize,
    })
}

fn duplicate(section: &'static str, name: String) -> CatalogueError {
    CatalogueError::Duplicate { section, name }
}
