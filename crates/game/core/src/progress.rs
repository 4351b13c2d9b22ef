//! End-of-turn bookkeeping: construction and research progress.
//!
//! Each settlement pours its zeal into the current construction and each
//! player pours the fortune of all their settlements into the blessing under
//! research. Finished work is applied on the spot. Projects never finish; they
//! only divert zeal while they are worked on.
use crate::catalogue::{BlessingId, Catalogue};
use crate::state::{ConstructionTarget, Faction, GameState, Player, Settlement, Unit};
use crate::yields::{YieldCalculator, YieldMode};

/// Work that finished during [`end_turn`] or a buyout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Completion {
    Construction {
        player: usize,
        settlement: usize,
        target: ConstructionTarget,
    },
    Blessing {
        player: usize,
        blessing: BlessingId,
    },
}

/// Zeal cost of a target; `None` for projects.
pub fn construction_cost(catalogue: &Catalogue, target: ConstructionTarget) -> Option<f64> {
    match target {
        ConstructionTarget::Improvement(id) => catalogue.improvement(id).map(|imp| imp.cost),
        ConstructionTarget::UnitPlan(id) => catalogue.unit_plan(id).map(|plan| plan.cost),
        ConstructionTarget::Project(_) => None,
    }
}

/// Wealth needed to finish the current construction at once: one per point of
/// zeal still missing. `None` for idle settlements and projects.
pub fn buyout_price(catalogue: &Catalogue, settlement: &Settlement) -> Option<f64> {
    let work = settlement.current_work?;
    let cost = construction_cost(catalogue, work.target)?;
    Some((cost - work.zeal_consumed).max(0.0))
}

/// Applies the settlement's current construction and clears it.
///
/// Improvements join the settlement and apply their satisfaction and strength
/// effects; the Concentrated fortify twice as well. Units join the garrison,
/// and a settler marks the settlement as having produced one. Returns `None`
/// and changes nothing for projects and idle settlements.
pub fn complete_construction(
    catalogue: &Catalogue,
    faction: Faction,
    settlement: &mut Settlement,
) -> Option<ConstructionTarget> {
    let target = settlement.current_target()?;
    match target {
        ConstructionTarget::Improvement(id) => {
            let effect = catalogue.improvement(id)?.effect;
            settlement.improvements.push(id);
            settlement.adjust_satisfaction(f64::from(effect.satisfaction));

            let strength = f64::from(effect.strength) * strength_multiplier(faction);
            settlement.strength += strength;
            settlement.max_strength += strength;
        }
        ConstructionTarget::UnitPlan(id) => {
            let plan = catalogue.unit_plan(id)?;
            if plan.can_settle {
                settlement.produced_settler = true;
            }
            let unit = Unit::new(id, plan, settlement.location);
            settlement.garrison.push(unit);
        }
        ConstructionTarget::Project(_) => return None,
    }

    settlement.current_work = None;
    Some(target)
}

/// Adds `zeal` to the current construction, completing it once paid for.
pub fn advance_construction(
    catalogue: &Catalogue,
    faction: Faction,
    settlement: &mut Settlement,
    zeal: f64,
) -> Option<ConstructionTarget> {
    let remaining = buyout_price(catalogue, settlement)?;
    if let Some(work) = settlement.current_work.as_mut() {
        work.zeal_consumed += zeal;
    }

    if zeal >= remaining {
        complete_construction(catalogue, faction, settlement)
    } else {
        None
    }
}

/// Pays the buyout price from the player's wealth and completes the work.
///
/// Nothing changes when the player cannot afford it.
pub fn buyout_construction(
    catalogue: &Catalogue,
    player: &mut Player,
    settlement_index: usize,
) -> Option<ConstructionTarget> {
    let faction = player.faction;
    let settlement = player.settlements.get_mut(settlement_index)?;
    let price = buyout_price(catalogue, settlement)?;
    if player.wealth < price {
        return None;
    }

    let target = complete_construction(catalogue, faction, settlement)?;
    player.wealth -= price;
    Some(target)
}

/// Adds `fortune` to the ongoing blessing, granting it once paid for.
pub fn advance_research(
    catalogue: &Catalogue,
    player: &mut Player,
    fortune: f64,
) -> Option<BlessingId> {
    let ongoing = player.ongoing_blessing.as_mut()?;
    let cost = catalogue.blessing(ongoing.blessing)?.cost;
    ongoing.fortune_consumed += fortune;
    if ongoing.fortune_consumed < cost {
        return None;
    }

    let blessing = ongoing.blessing;
    player.blessings.insert(blessing);
    player.ongoing_blessing = None;
    Some(blessing)
}

/// Collects every player's yields for the turn.
///
/// Wealth is added to the treasury, zeal advances each settlement's
/// construction and fortune advances research. Lenient totals are used, so
/// every settlement contributes at least a trickle of zeal and fortune.
pub fn end_turn(catalogue: &Catalogue, state: &mut GameState) -> Vec<Completion> {
    let GameState {
        board,
        players,
        is_night,
        ..
    } = state;
    let calculator = YieldCalculator::new(catalogue, board, *is_night);
    let mut completions = Vec::new();

    for (p, player) in players.iter_mut().enumerate() {
        let faction = player.faction;
        let mut wealth = 0.0;
        let mut fortune = 0.0;

        for (s, settlement) in player.settlements.iter_mut().enumerate() {
            let totals = calculator.settlement_totals(faction, settlement, YieldMode::Lenient);
            wealth += totals.wealth;
            fortune += totals.fortune;

            if let Some(target) = advance_construction(catalogue, faction, settlement, totals.zeal)
            {
                completions.push(Completion::Construction {
                    player: p,
                    settlement: s,
                    target,
                });
            }
        }

        player.wealth += wealth;
        if let Some(blessing) = advance_research(catalogue, player, fortune) {
            completions.push(Completion::Blessing {
                player: p,
                blessing,
            });
        }
    }

    completions
}

fn strength_multiplier(faction: Faction) -> f64 {
    if faction == Faction::Concentrated {
        2.0
    } else {
        1.0
    }
}
