//! Moving garrisoned units out onto the board.
//!
//! Non-defensive players send out every unit their settlements train.
//! Defensive players hold their garrison back until the settlement is under
//! siege, has lost strength, or has crowded its garrison.

use game_core::state::spiral;
use game_core::{AttackStyle, Board, GameConfig, Player, Position, Settlement};

use super::Obstructions;

/// A unit that left its settlement's garrison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    /// Index of the unit in the player's deployed units.
    pub unit: usize,
    pub from: Position,
    pub to: Position,
}

pub struct DeploymentPolicy<'a> {
    config: &'a GameConfig,
}

impl<'a> DeploymentPolicy<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Whether the settlement should send out a garrisoned unit.
    pub fn should_deploy(&self, attacking: AttackStyle, settlement: &Settlement) -> bool {
        if settlement.garrison.is_empty() {
            return false;
        }
        if attacking != AttackStyle::Defensive {
            return true;
        }

        settlement.besieged
            || settlement.strength < settlement.max_strength
            || settlement.garrison.len() >= self.config.ai.defensive_garrison_limit
    }

    /// First free quad next to the settlement, nearest row first.
    pub fn landing(
        board: &Board,
        settlement: &Settlement,
        obstructions: &Obstructions,
    ) -> Option<Position> {
        spiral(settlement.location, 1).skip(1).find(|&position| {
            board.contains(position) && !board.is_relic(position) && !obstructions.contains(position)
        })
    }

    /// Deploys the settlement's first garrisoned unit if the player's style
    /// calls for it and there is room next to the settlement.
    pub fn run(
        &self,
        board: &Board,
        player: &mut Player,
        settlement_index: usize,
        obstructions: &mut Obstructions,
    ) -> Option<Deployment> {
        let attacking = player.playstyle?.attacking;
        let settlement = player.settlements.get_mut(settlement_index)?;
        if !self.should_deploy(attacking, settlement) {
            return None;
        }

        let Some(to) = Self::landing(board, settlement, obstructions) else {
            tracing::debug!(
                settlement = %settlement.name,
                "DeploymentPolicy: no free quad around settlement"
            );
            return None;
        };

        let from = settlement.location;
        let mut unit = settlement.garrison.remove(0);
        unit.location = to;
        tracing::debug!(
            settlement = %settlement.name,
            unit = %unit.plan.name,
            %to,
            "DeploymentPolicy: unit deployed"
        );

        obstructions.insert(to);
        player.units.push(unit);
        Some(Deployment {
            unit: player.units.len() - 1,
            from,
            to,
        })
    }
}
