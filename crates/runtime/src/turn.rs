//! Once-per-turn driver for every computer-controlled player.

use std::fmt;

use game_core::{
    BlessingId, Catalogue, ConstructionTarget, GameConfig, GameState, Position, RngOracle,
    YieldCalculator,
};

use crate::providers::{
    BlessingSelector, BuyoutPolicy, ConstructionPlanner, DeploymentPolicy, Obstructions,
    RelicSeeker, UnitMovement, UnitRolls,
};

/// A decision committed during [`AiTurn::run`], in the order it was made.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AiDecision {
    Blessing {
        player: usize,
        blessing: BlessingId,
    },
    Construction {
        player: usize,
        settlement: usize,
        target: ConstructionTarget,
    },
    Buyout {
        player: usize,
        settlement: usize,
        target: ConstructionTarget,
        price: f64,
    },
    Deployment {
        player: usize,
        settlement: usize,
        unit: usize,
        to: Position,
    },
    Unit {
        player: usize,
        unit: usize,
        movement: UnitMovement,
    },
}

impl AiDecision {
    pub fn player(&self) -> usize {
        match self {
            AiDecision::Blessing { player, .. }
            | AiDecision::Construction { player, .. }
            | AiDecision::Buyout { player, .. }
            | AiDecision::Deployment { player, .. }
            | AiDecision::Unit { player, .. } => *player,
        }
    }
}

impl fmt::Display for AiDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiDecision::Blessing { player, blessing } => {
                write!(f, "player {player} researches blessing {blessing}")
            }
            AiDecision::Construction {
                player,
                settlement,
                target,
            } => write!(f, "player {player} settlement {settlement} builds {target:?}"),
            AiDecision::Buyout {
                player,
                settlement,
                target,
                price,
            } => write!(
                f,
                "player {player} settlement {settlement} buys out {target:?} for {price:.0}"
            ),
            AiDecision::Deployment {
                player,
                settlement,
                unit,
                to,
            } => write!(
                f,
                "player {player} settlement {settlement} deploys unit {unit} to {to}"
            ),
            AiDecision::Unit {
                player,
                unit,
                movement:
                    UnitMovement::Investigated {
                        to, relic, outcome, ..
                    },
            } => write!(
                f,
                "player {player} unit {unit} reaches {to} and investigates relic at {relic}: {outcome}"
            ),
            AiDecision::Unit {
                player,
                unit,
                movement: UnitMovement::Wandered { from, to },
            } => write!(f, "player {player} unit {unit} wanders {from} -> {to}"),
        }
    }
}

/// Runs blessing, construction, deployment and movement decisions for every
/// computer player in turn order.
pub struct AiTurn<'a> {
    catalogue: &'a Catalogue,
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> AiTurn<'a> {
    pub fn new(catalogue: &'a Catalogue, config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self {
            catalogue,
            config,
            rng,
        }
    }

    /// Processes one turn for every player with a playstyle.
    ///
    /// Human players are skipped. Settlements already building something are
    /// only considered for a buyout, and units without stamina are left alone.
    pub fn run(&self, state: &mut GameState) -> Vec<AiDecision> {
        let mut decisions = Vec::new();

        for p in 0..state.players.len() {
            if !state.players[p].is_ai() {
                continue;
            }
            let span = tracing::info_span!("ai_player", player = %state.players[p].name, turn = state.turn);
            let _enter = span.enter();

            self.research(state, p, &mut decisions);
            self.construct(state, p, &mut decisions);
            self.deploy(state, p, &mut decisions);
            self.move_units(state, p, &mut decisions);
        }

        tracing::info!(turn = state.turn, decisions = decisions.len(), "AI turn complete");
        decisions
    }

    fn research(&self, state: &mut GameState, p: usize, decisions: &mut Vec<AiDecision>) {
        if state.players[p].ongoing_blessing.is_some() {
            return;
        }

        let totals = YieldCalculator::new(self.catalogue, &state.board, state.is_night)
            .player(&state.players[p]);
        let selector = BlessingSelector::new(self.catalogue);
        if let Some(blessing) = selector.select(&mut state.players[p], totals) {
            tracing::info!(
                blessing = ?self.catalogue.blessing(blessing).map(|b| b.name.as_str()),
                "Blessing chosen"
            );
            decisions.push(AiDecision::Blessing {
                player: p,
                blessing,
            });
        }
    }

    fn construct(&self, state: &mut GameState, p: usize, decisions: &mut Vec<AiDecision>) {
        let planner = ConstructionPlanner::new(self.catalogue, self.config);
        let buyout = BuyoutPolicy::new(self.catalogue, self.config);

        for s in 0..state.players[p].settlements.len() {
            let span = tracing::debug_span!(
                "settlement",
                settlement = %state.players[p].settlements[s].name
            );
            let _enter = span.enter();

            if state.players[p].settlements[s].current_work.is_none() {
                let Some(target) =
                    planner.plan_settlement(&state.board, state.is_night, &mut state.players[p], s)
                else {
                    continue;
                };
                tracing::info!(?target, "Construction chosen");
                decisions.push(AiDecision::Construction {
                    player: p,
                    settlement: s,
                    target,
                });
            }

            if let Some(bought) = buyout.run(&mut state.players[p], s) {
                tracing::info!(target = ?bought.target, price = bought.price, "Construction bought out");
                decisions.push(AiDecision::Buyout {
                    player: p,
                    settlement: s,
                    target: bought.target,
                    price: bought.price,
                });
            }
        }
    }

    fn deploy(&self, state: &mut GameState, p: usize, decisions: &mut Vec<AiDecision>) {
        let policy = DeploymentPolicy::new(self.config);
        let mut obstructions = Obstructions::all(&state.players);

        for s in 0..state.players[p].settlements.len() {
            if let Some(deployment) =
                policy.run(&state.board, &mut state.players[p], s, &mut obstructions)
            {
                tracing::info!(unit = deployment.unit, to = %deployment.to, "Unit deployed");
                decisions.push(AiDecision::Deployment {
                    player: p,
                    settlement: s,
                    unit: deployment.unit,
                    to: deployment.to,
                });
            }
        }
    }

    fn move_units(&self, state: &mut GameState, p: usize, decisions: &mut Vec<AiDecision>) {
        let seeker = RelicSeeker::new(self.catalogue, self.config, self.rng);

        for u in 0..state.players[p].units.len() {
            if state.players[p].units[u].remaining_stamina == 0 {
                continue;
            }

            let obstructions = Obstructions::gather(&state.players, p, u);
            let rolls = UnitRolls::new(state.game_seed, state.turn, p, u);
            if let Some(movement) = seeker.run(
                &mut state.board,
                &mut state.players[p],
                u,
                &obstructions,
                rolls,
            ) {
                tracing::info!(unit = u, ?movement, "Unit moved");
                decisions.push(AiDecision::Unit {
                    player: p,
                    unit: u,
                    movement,
                });
            }
        }
    }
}
