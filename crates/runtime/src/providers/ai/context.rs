//! Planning context for settlement-level decisions.
//!
//! The [`PlannerContext`] is the "blackboard" every construction stage reads
//! from. It caches the settlement's totals and the catalogue entries that are
//! currently available so each stage sees the same snapshot.

use game_core::{
    Board, Catalogue, GameConfig, Improvement, ImprovementId, Player, Resource, Settlement, Totals,
    UnitPlan, UnitPlanId, YieldCalculator, YieldMode,
};

/// Read-only view of one settlement and its owner for a single decision.
///
/// # Caching Strategy
///
/// Totals and availability lists are computed once in [`PlannerContext::new`]
/// and reused by every stage, so repeated queries never disagree within one
/// decision.
pub struct PlannerContext<'a> {
    pub catalogue: &'a Catalogue,
    pub config: &'a GameConfig,
    pub player: &'a Player,
    pub settlement: &'a Settlement,

    /// Strict totals, used to classify the lacking resource.
    totals: Totals,
    /// Lenient zeal, used as the divisor for build-time estimates.
    zeal: f64,
    available_improvements: Vec<ImprovementId>,
    available_unit_plans: Vec<UnitPlanId>,
}

impl<'a> PlannerContext<'a> {
    pub fn new(
        catalogue: &'a Catalogue,
        config: &'a GameConfig,
        board: &Board,
        is_night: bool,
        player: &'a Player,
        settlement: &'a Settlement,
    ) -> Self {
        let calculator = YieldCalculator::new(catalogue, board, is_night);
        let totals = calculator.settlement_totals(player.faction, settlement, YieldMode::Strict);
        let zeal = calculator
            .settlement_totals(player.faction, settlement, YieldMode::Lenient)
            .zeal;

        Self {
            catalogue,
            config,
            player,
            settlement,
            totals,
            zeal,
            available_improvements: catalogue.available_improvements(player, settlement),
            available_unit_plans: catalogue.available_unit_plans(player),
        }
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn lacking(&self) -> Resource {
        self.totals.lacking()
    }

    /// Available improvements in catalogue order.
    pub fn available_improvements(&self) -> impl Iterator<Item = (ImprovementId, &'a Improvement)> {
        let catalogue = self.catalogue;
        self.available_improvements
            .iter()
            .filter_map(move |id| catalogue.improvement(*id).map(|imp| (*id, imp)))
    }

    /// Available unit plans in catalogue order.
    pub fn available_unit_plans(&self) -> impl Iterator<Item = (UnitPlanId, &'a UnitPlan)> {
        let catalogue = self.catalogue;
        self.available_unit_plans
            .iter()
            .filter_map(move |id| catalogue.unit_plan(*id).map(|plan| (*id, plan)))
    }

    /// Estimated turns to build something of the given zeal cost.
    pub fn turns_to_build(&self, cost: f64) -> f64 {
        YieldCalculator::turns_to_build(cost, self.zeal)
    }

    /// Whether the build time stays within the configured ceiling.
    pub fn is_affordable(&self, cost: f64) -> bool {
        self.turns_to_build(cost) <= self.config.ai.construction_turn_ceiling
    }

    /// True when the player has no deployed units and the settlement no garrison.
    pub fn has_no_units(&self) -> bool {
        self.player.units.is_empty() && self.settlement.garrison.is_empty()
    }

    /// Healers deployed by the player plus those garrisoned here.
    pub fn healer_count(&self) -> usize {
        self.local_units().filter(|unit| unit.heals()).count()
    }

    /// Non-healers deployed by the player plus those garrisoned here.
    pub fn non_healer_count(&self) -> usize {
        self.local_units().filter(|unit| !unit.heals()).count()
    }

    fn local_units(&self) -> impl Iterator<Item = &game_core::Unit> {
        self.player
            .units
            .iter()
            .chain(self.settlement.garrison.iter())
    }
}
