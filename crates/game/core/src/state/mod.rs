//! Authoritative game state representation.
//!
//! The engine reads players, settlements, units and the board from here and
//! mutates only construction targets, blessing research, unit positions and
//! stamina, relic flags, and the rewards a relic hands out.
mod board;
mod common;
mod player;
mod settlement;
mod unit;

pub use board::{Biome, Board, Quad, spiral};
pub use common::Position;
pub use player::{
    AttackStyle, ExpansionStyle, Faction, OngoingBlessing, Playstyle, Player,
};
pub use settlement::{
    Construction, ConstructionTarget, EconomicStatus, HarvestStatus, Settlement,
};
pub use unit::Unit;

/// Canonical snapshot of the game state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    pub game_seed: u64,
    /// Turn counter, starting at 1.
    pub turn: u64,
    pub is_night: bool,
    pub board: Board,
    pub players: Vec<Player>,
}

impl GameState {
    pub fn new(game_seed: u64, board: Board, players: Vec<Player>) -> Self {
        Self {
            game_seed,
            turn: 1,
            is_night: false,
            board,
            players,
        }
    }

    /// Restores stamina and attack flags on every unit.
    pub fn refresh_units(&mut self) {
        for player in &mut self.players {
            for unit in &mut player.units {
                unit.refresh();
            }
            for settlement in &mut player.settlements {
                for unit in &mut settlement.garrison {
                    unit.refresh();
                }
            }
        }
    }
}
