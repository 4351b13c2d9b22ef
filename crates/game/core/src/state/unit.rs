use crate::catalogue::{UnitPlan, UnitPlanId};
use crate::state::Position;

/// A deployed or garrisoned unit.
///
/// The unit keeps its own copy of the plan so per-unit rewards (extra power,
/// waived upkeep) never leak into the catalogue.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub plan_id: UnitPlanId,
    pub plan: UnitPlan,
    pub health: f64,
    pub remaining_stamina: u32,
    pub location: Position,
    /// Set once the unit has attacked this turn.
    pub has_acted: bool,
}

impl Unit {
    /// Creates a fresh unit at full health and stamina.
    pub fn new(plan_id: UnitPlanId, plan: &UnitPlan, location: Position) -> Self {
        Self {
            plan_id,
            plan: plan.clone(),
            health: plan.max_health,
            remaining_stamina: plan.total_stamina,
            location,
            has_acted: false,
        }
    }

    pub fn heals(&self) -> bool {
        self.plan.heals
    }

    /// Restores stamina and the attack flag at the start of a turn.
    pub fn refresh(&mut self) {
        self.remaining_stamina = self.plan.total_stamina;
        self.has_acted = false;
    }
}
