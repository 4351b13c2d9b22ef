//! Settlement and player resource totals.
//!
//! A settlement's base yield per resource is the sum of its worked quads and
//! its built improvements. The base is then scaled by level, settlement status,
//! faction and time of day, and a project in progress diverts a quarter of the
//! settlement's zeal into another resource.
use std::ops::Add;

use crate::catalogue::{Catalogue, Effect, ProjectCategory};
use crate::state::{
    Board, ConstructionTarget, EconomicStatus, Faction, HarvestStatus, Player, Settlement,
};

/// The four accumulating resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    Wealth,
    Harvest,
    Zeal,
    Fortune,
}

impl Resource {
    /// Tie-break order: when totals are equal the earlier resource is lacking.
    pub const ALL: [Resource; 4] = [
        Resource::Wealth,
        Resource::Harvest,
        Resource::Zeal,
        Resource::Fortune,
    ];

    /// The magnitude an improvement effect contributes to this resource.
    pub fn of_effect(self, effect: &Effect) -> i32 {
        match self {
            Resource::Wealth => effect.wealth,
            Resource::Harvest => effect.harvest,
            Resource::Zeal => effect.zeal,
            Resource::Fortune => effect.fortune,
        }
    }
}

/// Per-resource totals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Totals {
    pub wealth: f64,
    pub harvest: f64,
    pub zeal: f64,
    pub fortune: f64,
}

impl Totals {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(wealth: f64, harvest: f64, zeal: f64, fortune: f64) -> Self {
        Self {
            wealth,
            harvest,
            zeal,
            fortune,
        }
    }

    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Wealth => self.wealth,
            Resource::Harvest => self.harvest,
            Resource::Zeal => self.zeal,
            Resource::Fortune => self.fortune,
        }
    }

    /// The resource with the smallest total.
    ///
    /// Ties go to the first resource in [`Resource::ALL`] order.
    pub fn lacking(&self) -> Resource {
        let mut lacking = Resource::Wealth;
        for resource in Resource::ALL {
            if self.get(resource) < self.get(lacking) {
                lacking = resource;
            }
        }
        lacking
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals::new(
            self.wealth + rhs.wealth,
            self.harvest + rhs.harvest,
            self.zeal + rhs.zeal,
            self.fortune + rhs.fortune,
        )
    }
}

/// How zeal and fortune are floored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YieldMode {
    /// Every total floors at zero.
    Strict,
    /// Zeal and fortune floor at [`YieldCalculator::LENIENT_FLOOR`] so they can
    /// be used as divisors when estimating build and research time.
    Lenient,
}

/// Totals plus the settlement's satisfaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettlementYield {
    pub totals: Totals,
    pub satisfaction: f64,
}

/// Computes totals against a fixed catalogue, board and time of day.
#[derive(Clone, Copy)]
pub struct YieldCalculator<'a> {
    catalogue: &'a Catalogue,
    board: &'a Board,
    is_night: bool,
}

impl<'a> YieldCalculator<'a> {
    pub const LENIENT_FLOOR: f64 = 0.5;
    const LEVEL_BONUS_PER_LEVEL: f64 = 0.25;
    const PROJECT_ZEAL_SHARE: f64 = 0.25;

    pub fn new(catalogue: &'a Catalogue, board: &'a Board, is_night: bool) -> Self {
        Self {
            catalogue,
            board,
            is_night,
        }
    }

    /// Totals and satisfaction for one settlement.
    pub fn settlement(
        &self,
        player: &Player,
        settlement: &Settlement,
        mode: YieldMode,
    ) -> SettlementYield {
        SettlementYield {
            totals: self.settlement_totals(player.faction, settlement, mode),
            satisfaction: settlement.satisfaction(),
        }
    }

    /// Sum of strict totals over every settlement the player controls.
    pub fn player(&self, player: &Player) -> Totals {
        player
            .settlements
            .iter()
            .map(|settlement| self.settlement_totals(player.faction, settlement, YieldMode::Strict))
            .fold(Totals::ZERO, Add::add)
    }

    pub fn settlement_totals(
        &self,
        faction: Faction,
        settlement: &Settlement,
        mode: YieldMode,
    ) -> Totals {
        let base = self.base(settlement);
        let level_factor =
            1.0 + f64::from(settlement.level().saturating_sub(1)) * Self::LEVEL_BONUS_PER_LEVEL;

        let mut wealth = base.wealth * level_factor;
        let mut harvest = base.harvest * level_factor;
        let mut zeal = base.zeal * level_factor;
        let mut fortune = base.fortune * level_factor;

        match settlement.economic_status {
            EconomicStatus::Recession => wealth = 0.0,
            EconomicStatus::Boom => wealth *= 1.5,
            EconomicStatus::Standard => {}
        }
        if settlement.besieged || settlement.harvest_status == HarvestStatus::Poor {
            harvest = 0.0;
        } else if settlement.harvest_status == HarvestStatus::Plentiful {
            harvest *= 1.5;
        }

        match faction {
            Faction::Godless => wealth *= 1.25,
            Faction::Orthodox => {
                wealth *= 0.75;
                fortune *= 1.25;
            }
            Faction::Ravenous => harvest *= 1.25,
            Faction::Agriculturists => zeal *= 0.75,
            Faction::Fundamentalists => zeal *= 1.25,
            Faction::Scrutineers => fortune *= 0.75,
            _ => {}
        }

        if self.is_night {
            if faction != Faction::Nocturne {
                harvest *= 0.5;
            }
            fortune *= 1.1;
        }

        if let Some(category) = self.project_in_progress(settlement) {
            let diverted = zeal.max(0.0) * Self::PROJECT_ZEAL_SHARE;
            match category {
                ProjectCategory::Bountiful => harvest += diverted,
                ProjectCategory::Economical => wealth += diverted,
                ProjectCategory::Magical => fortune += diverted,
            }
        }

        let (zeal_floor, fortune_floor) = match mode {
            YieldMode::Strict => (0.0, 0.0),
            YieldMode::Lenient => (Self::LENIENT_FLOOR, Self::LENIENT_FLOOR),
        };

        Totals::new(
            wealth.max(0.0),
            harvest.max(0.0),
            zeal.max(zeal_floor),
            fortune.max(fortune_floor),
        )
    }

    /// Raw quad and improvement sums before any modifier.
    fn base(&self, settlement: &Settlement) -> Totals {
        let quads = settlement
            .quads
            .iter()
            .filter_map(|position| self.board.quad(*position))
            .fold(Totals::ZERO, |acc, quad| {
                acc + Totals::new(
                    f64::from(quad.wealth),
                    f64::from(quad.harvest),
                    f64::from(quad.zeal),
                    f64::from(quad.fortune),
                )
            });

        let improvements = settlement
            .improvements
            .iter()
            .filter_map(|id| self.catalogue.improvement(*id))
            .fold(Totals::ZERO, |acc, imp| {
                acc + Totals::new(
                    f64::from(imp.effect.wealth),
                    f64::from(imp.effect.harvest),
                    f64::from(imp.effect.zeal),
                    f64::from(imp.effect.fortune),
                )
            });

        quads + improvements
    }

    fn project_in_progress(&self, settlement: &Settlement) -> Option<ProjectCategory> {
        match settlement.current_target()? {
            ConstructionTarget::Project(id) => self.catalogue.project(id).map(|p| p.category),
            _ => None,
        }
    }

    /// Turns needed to build something costing `cost` with the given lenient zeal.
    pub fn turns_to_build(cost: f64, zeal: f64) -> f64 {
        (cost / zeal.max(Self::LENIENT_FLOOR)).ceil()
    }
}
