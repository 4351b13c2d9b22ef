//! Playstyle-specific military overrides.
//!
//! Aggressive and defensive players keep a minimum garrison that grows with
//! settlement level. Until the garrison is met they train units instead of
//! following the economic plan. Defensive players additionally prefer
//! improvements that add strength.

use game_core::{AttackStyle, ConstructionTarget, GarrisonTarget, UnitPlan, UnitPlanId};

use super::PlannerContext;
use super::scoring::first_max;

pub struct GarrisonPolicy;

impl GarrisonPolicy {
    /// Override for the given attacking style, if one fires.
    pub fn choose(ctx: &PlannerContext, attacking: AttackStyle) -> Option<ConstructionTarget> {
        match attacking {
            AttackStyle::Aggressive => Self::aggressive(ctx),
            AttackStyle::Defensive => Self::defensive(ctx),
            AttackStyle::Neutral => None,
        }
    }

    /// Healers first, then the hardest-hitting fighter.
    fn aggressive(ctx: &PlannerContext) -> Option<ConstructionTarget> {
        let target = ctx.config.ai.aggressive;

        Self::missing_healer(ctx, target)
            .or_else(|| {
                Self::missing_fighter(ctx, target, |plan| plan.power, "highest power")
            })
            .map(ConstructionTarget::UnitPlan)
    }

    /// Healers first, then the sturdiest fighter, then strength improvements.
    fn defensive(ctx: &PlannerContext) -> Option<ConstructionTarget> {
        let target = ctx.config.ai.defensive;

        if let Some(plan) = Self::missing_healer(ctx, target).or_else(|| {
            Self::missing_fighter(ctx, target, |plan| plan.max_health, "highest health")
        }) {
            return Some(ConstructionTarget::UnitPlan(plan));
        }

        let fortification = ctx
            .available_improvements()
            .find(|(_, imp)| imp.effect.strength > 0);
        if let Some((id, imp)) = fortification {
            tracing::debug!(
                improvement = %imp.name,
                strength = imp.effect.strength,
                "GarrisonPolicy: garrison complete, fortifying"
            );
            return Some(ConstructionTarget::Improvement(id));
        }

        None
    }

    fn missing_healer(ctx: &PlannerContext, target: GarrisonTarget) -> Option<UnitPlanId> {
        let wanted = target.healers(ctx.settlement.level());
        let have = ctx.healer_count();
        if have >= wanted {
            return None;
        }

        let healer = first_max(
            ctx.available_unit_plans().filter(|(_, plan)| plan.heals),
            |(_, plan)| plan.power,
        );
        tracing::debug!(
            have,
            wanted,
            healer = ?healer.map(|(_, plan)| plan.name.as_str()),
            "GarrisonPolicy: healer shortage"
        );
        healer.map(|(id, _)| id)
    }

    fn missing_fighter(
        ctx: &PlannerContext,
        target: GarrisonTarget,
        rank: impl Fn(&UnitPlan) -> f64,
        ranking: &'static str,
    ) -> Option<UnitPlanId> {
        let wanted = target.fighters(ctx.settlement.level());
        let have = ctx.non_healer_count();
        if have >= wanted {
            return None;
        }

        let fighter = first_max(
            ctx.available_unit_plans().filter(|(_, plan)| plan.is_fighter()),
            |(_, plan)| rank(plan),
        );
        tracing::debug!(
            have,
            wanted,
            ranking,
            fighter = ?fighter.map(|(_, plan)| plan.name.as_str()),
            "GarrisonPolicy: unit shortage"
        );
        fighter.map(|(id, _)| id)
    }
}
