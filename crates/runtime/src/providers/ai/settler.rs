//! When a settlement should train a settler.
//!
//! A settlement trains at most one settler. Factions that never expand are
//! excluded outright. Otherwise a settlement becomes eligible once it reaches
//! the level its owner's expansion style asks for, or immediately when its
//! satisfaction has bottomed out and the population wants to leave.

use game_core::{ExpansionStyle, Settlement, UnitPlanId};

use super::PlannerContext;

pub struct SettlerPolicy;

impl SettlerPolicy {
    /// Whether the settlement may build a settler right now.
    pub fn is_eligible(ctx: &PlannerContext, expansion: ExpansionStyle) -> bool {
        let settlement = ctx.settlement;

        if !ctx.player.faction.can_settle() || settlement.produced_settler {
            return false;
        }

        let threshold = ctx.config.ai.settler_levels.for_style(expansion);
        settlement.satisfaction() <= Settlement::MIN_SATISFACTION || settlement.level() >= threshold
    }

    /// The first available unit plan able to found settlements.
    pub fn settler_plan(ctx: &PlannerContext) -> Option<UnitPlanId> {
        ctx.available_unit_plans()
            .find(|(_, plan)| plan.can_settle)
            .map(|(id, _)| id)
    }

    /// The settler to build, if the settlement is eligible and one is available.
    pub fn choose(ctx: &PlannerContext, expansion: ExpansionStyle) -> Option<UnitPlanId> {
        if !Self::is_eligible(ctx, expansion) {
            return None;
        }

        let plan = Self::settler_plan(ctx);
        tracing::debug!(
            settlement = %ctx.settlement.name,
            level = ctx.settlement.level(),
            satisfaction = ctx.settlement.satisfaction(),
            ?expansion,
            ?plan,
            "SettlerPolicy: settlement eligible for a settler"
        );
        plan
    }
}
