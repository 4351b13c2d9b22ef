//! Construction planning for settlements.
//!
//! The planner runs in stages. Computer players first consult the settler
//! policy and their playstyle's garrison overrides. When none of those fire,
//! and always for human-assisted settlements, the shared base algorithm runs:
//!
//! 1. **No units**: train the first available unit plan.
//! 2. **Satisfaction rescue**: below the rescue threshold, build the cheapest
//!    tier of satisfaction improvements, best satisfaction plus harvest first.
//!    When that tier is too slow to build, settle for the ideal improvement
//!    among those that are affordable.
//! 3. **Harvest boundary**: when food runs short, build the best affordable
//!    harvest improvement from the cheapest tier offering one.
//! 4. **Ideal**: pick the candidate contributing most to the lacking resource,
//!    preferring one that does not lower satisfaction.
//!
//! Stages that find nothing fall through to the ideal choice. Every comparison
//! keeps the first candidate in catalogue order on ties.

use game_core::{
    Board, Catalogue, ConstructionTarget, GameConfig, Player, Resource, UnitPlanId,
};

use super::PlannerContext;
use super::garrison::GarrisonPolicy;
use super::scoring::first_max;
use super::settler::SettlerPolicy;

/// A construction candidate valued against one resource.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    target: ConstructionTarget,
    value: f64,
    satisfaction: i32,
}

/// Chooses the next construction target for a settlement.
#[derive(Clone, Copy)]
pub struct ConstructionPlanner<'a> {
    catalogue: &'a Catalogue,
    config: &'a GameConfig,
}

impl<'a> ConstructionPlanner<'a> {
    pub fn new(catalogue: &'a Catalogue, config: &'a GameConfig) -> Self {
        Self { catalogue, config }
    }

    /// Builds the planning context for one of the player's settlements.
    pub fn context<'s>(
        &self,
        board: &Board,
        is_night: bool,
        player: &'s Player,
        settlement_index: usize,
    ) -> Option<PlannerContext<'s>>
    where
        'a: 's,
    {
        let settlement = player.settlements.get(settlement_index)?;
        Some(PlannerContext::new(
            self.catalogue,
            self.config,
            board,
            is_night,
            player,
            settlement,
        ))
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    /// Target for a computer-controlled settlement.
    pub fn choose(&self, ctx: &PlannerContext) -> Option<ConstructionTarget> {
        let playstyle = ctx.player.playstyle.unwrap_or_default();

        if let Some(plan) = SettlerPolicy::choose(ctx, playstyle.expansion) {
            return Some(ConstructionTarget::UnitPlan(plan));
        }

        if let Some(target) = GarrisonPolicy::choose(ctx, playstyle.attacking) {
            return Some(target);
        }

        self.choose_assisted(ctx)
    }

    /// Target for a human-assisted settlement: the base algorithm only.
    pub fn choose_assisted(&self, ctx: &PlannerContext) -> Option<ConstructionTarget> {
        if ctx.has_no_units() {
            let plan = first_unit_plan(ctx);
            tracing::debug!(?plan, "ConstructionPlanner: no units, training first plan");
            return plan.map(ConstructionTarget::UnitPlan);
        }

        let ai = &self.config.ai;
        let lacking = ctx.lacking();

        if ctx.settlement.satisfaction() < ai.rescue_satisfaction {
            if let Some(target) = self.rescue(ctx) {
                return Some(target);
            }
            if let Some(target) = self.affordable_ideal(ctx, lacking) {
                return Some(target);
            }
        } else if ctx.totals().harvest < ai.harvest_boundary {
            if let Some(target) = self.harvest(ctx) {
                return Some(target);
            }
        }

        self.ideal(ctx, lacking)
    }

    /// Plans a computer-controlled settlement and records the choice.
    ///
    /// Returns the target that was set, or `None` when nothing was available
    /// and the settlement was left untouched.
    pub fn plan_settlement(
        &self,
        board: &Board,
        is_night: bool,
        player: &mut Player,
        settlement_index: usize,
    ) -> Option<ConstructionTarget> {
        let target = {
            let ctx = self.context(board, is_night, player, settlement_index)?;
            self.choose(&ctx)?
        };
        player.settlements[settlement_index].set_current_work(target);
        Some(target)
    }

    /// Plans a human-assisted settlement and records the choice.
    pub fn plan_assisted(
        &self,
        board: &Board,
        is_night: bool,
        player: &mut Player,
        settlement_index: usize,
    ) -> Option<ConstructionTarget> {
        let target = {
            let ctx = self.context(board, is_night, player, settlement_index)?;
            self.choose_assisted(&ctx)?
        };
        player.settlements[settlement_index].set_current_work(target);
        Some(target)
    }

    // ========================================================================
    // Base algorithm stages
    // ========================================================================

    /// Best affordable improvement from the lowest tier that still has a
    /// satisfaction improvement left to build.
    fn rescue(&self, ctx: &PlannerContext) -> Option<ConstructionTarget> {
        let lowest_tier = ctx
            .available_improvements()
            .filter(|(_, imp)| imp.effect.satisfaction > 0)
            .map(|(_, imp)| imp.tier)
            .min()?;

        let pick = first_max(
            ctx.available_improvements().filter(|(_, imp)| {
                imp.tier == lowest_tier
                    && imp.effect.satisfaction > 0
                    && ctx.is_affordable(imp.cost)
            }),
            |(_, imp)| f64::from(imp.effect.satisfaction + imp.effect.harvest),
        );

        tracing::debug!(
            satisfaction = ctx.settlement.satisfaction(),
            tier = lowest_tier,
            pick = ?pick.map(|(_, imp)| imp.name.as_str()),
            "ConstructionPlanner: satisfaction rescue"
        );
        pick.map(|(id, _)| ConstructionTarget::Improvement(id))
    }

    /// Best affordable harvest improvement from the lowest tier offering one.
    fn harvest(&self, ctx: &PlannerContext) -> Option<ConstructionTarget> {
        let lowest_tier = ctx
            .available_improvements()
            .filter(|(_, imp)| imp.effect.harvest > 0)
            .map(|(_, imp)| imp.tier)
            .min()?;

        let pick = first_max(
            ctx.available_improvements().filter(|(_, imp)| {
                imp.tier == lowest_tier && imp.effect.harvest > 0 && ctx.is_affordable(imp.cost)
            }),
            |(_, imp)| f64::from(imp.effect.harvest),
        );

        tracing::debug!(
            harvest = ctx.totals().harvest,
            tier = lowest_tier,
            pick = ?pick.map(|(_, imp)| imp.name.as_str()),
            "ConstructionPlanner: harvest below boundary"
        );
        pick.map(|(id, _)| ConstructionTarget::Improvement(id))
    }

    /// The candidate contributing most to `lacking`, avoiding satisfaction loss
    /// whenever some candidate allows it.
    fn ideal(&self, ctx: &PlannerContext, lacking: Resource) -> Option<ConstructionTarget> {
        let candidates = self.candidates(ctx, lacking);
        Self::pick_ideal(&candidates, lacking)
    }

    /// The ideal among improvements that can be built within the turn ceiling.
    fn affordable_ideal(
        &self,
        ctx: &PlannerContext,
        lacking: Resource,
    ) -> Option<ConstructionTarget> {
        let candidates: Vec<Candidate> = improvement_candidates(ctx, lacking)
            .filter(|(cost, _)| ctx.is_affordable(*cost))
            .map(|(_, candidate)| candidate)
            .collect();
        Self::pick_ideal(&candidates, lacking)
    }

    fn pick_ideal(candidates: &[Candidate], lacking: Resource) -> Option<ConstructionTarget> {
        let ideal = first_max(candidates.iter(), |c| c.value)?;

        let chosen = if ideal.satisfaction < 0 {
            first_max(
                candidates.iter().filter(|c| c.satisfaction >= 0),
                |c| c.value,
            )
            .unwrap_or(ideal)
        } else {
            ideal
        };

        tracing::debug!(
            %lacking,
            ideal = ?ideal.target,
            chosen = ?chosen.target,
            value = chosen.value,
            "ConstructionPlanner: ideal construction"
        );
        Some(chosen.target)
    }

    /// Improvements, then projects, then unit plans, each in catalogue order.
    fn candidates(&self, ctx: &PlannerContext, lacking: Resource) -> Vec<Candidate> {
        let improvements = improvement_candidates(ctx, lacking).map(|(_, candidate)| candidate);
        let projects = self.catalogue.projects().map(|(id, _)| Candidate {
            target: ConstructionTarget::Project(id),
            value: 0.0,
            satisfaction: 0,
        });
        let units = ctx.available_unit_plans().map(|(id, _)| Candidate {
            target: ConstructionTarget::UnitPlan(id),
            value: 0.0,
            satisfaction: 0,
        });

        improvements.chain(projects).chain(units).collect()
    }
}

/// Available improvements valued against `lacking`, paired with their cost.
fn improvement_candidates<'c>(
    ctx: &'c PlannerContext,
    lacking: Resource,
) -> impl Iterator<Item = (f64, Candidate)> + 'c {
    ctx.available_improvements().map(move |(id, imp)| {
        let candidate = Candidate {
            target: ConstructionTarget::Improvement(id),
            value: f64::from(lacking.of_effect(&imp.effect)),
            satisfaction: imp.effect.satisfaction,
        };
        (imp.cost, candidate)
    })
}

fn first_unit_plan(ctx: &PlannerContext) -> Option<UnitPlanId> {
    ctx.available_unit_plans().next().map(|(id, _)| id)
}
