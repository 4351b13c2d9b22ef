//! Unsupervised unit movement: relic seeking with a random-walk fallback.
//!
//! A unit without orders looks for the nearest relic within its stamina. If
//! one of the relic's orthogonal neighbours on the unit's side is free, the
//! unit steps there and investigates. Otherwise it wanders to a random quad
//! within reach. Either way the unit's stamina is spent for the turn.

use std::collections::BTreeSet;

use game_core::{
    Board, Catalogue, GameConfig, Player, Position, RelicOutcome, RngOracle, compute_seed,
    investigate_relic, roll_context,
};

// ============================================================================
// Obstructions
// ============================================================================

/// Quads a moving unit may not end its move on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Obstructions {
    occupied: BTreeSet<Position>,
}

impl Obstructions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every deployed unit except the mover, plus every settlement.
    ///
    /// Garrisoned units stand on their settlement, which is already blocked.
    pub fn gather(players: &[Player], player_index: usize, unit_index: usize) -> Self {
        Self::collect(players, Some((player_index, unit_index)))
    }

    /// Every deployed unit and every settlement.
    pub fn all(players: &[Player]) -> Self {
        Self::collect(players, None)
    }

    fn collect(players: &[Player], mover: Option<(usize, usize)>) -> Self {
        let mut obstructions = Self::new();
        for (p, player) in players.iter().enumerate() {
            for (u, unit) in player.units.iter().enumerate() {
                if mover == Some((p, u)) {
                    continue;
                }
                obstructions.insert(unit.location);
            }
            for settlement in &player.settlements {
                obstructions.insert(settlement.location);
            }
        }
        obstructions
    }

    pub fn insert(&mut self, position: Position) {
        self.occupied.insert(position);
    }

    pub fn contains(&self, position: Position) -> bool {
        self.occupied.contains(&position)
    }
}

impl FromIterator<Position> for Obstructions {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            occupied: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Seeds
// ============================================================================

/// Seed inputs for one unit's rolls this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitRolls {
    pub game_seed: u64,
    pub turn: u64,
    /// Player index in the high half, unit index in the low half.
    pub actor: u32,
}

impl UnitRolls {
    pub fn new(game_seed: u64, turn: u64, player_index: usize, unit_index: usize) -> Self {
        let actor = ((player_index as u32 & 0xffff) << 16) | (unit_index as u32 & 0xffff);
        Self {
            game_seed,
            turn,
            actor,
        }
    }

    pub fn seed(&self, context: u32) -> u64 {
        compute_seed(self.game_seed, self.turn, self.actor, context)
    }
}

// ============================================================================
// Seeker
// ============================================================================

/// What a unit did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitMovement {
    /// Stepped next to `relic` and investigated it.
    Investigated {
        from: Position,
        to: Position,
        relic: Position,
        outcome: RelicOutcome,
    },
    /// Wandered without finding a reachable relic. `to == from` when the
    /// random target was blocked.
    Wandered { from: Position, to: Position },
}

impl UnitMovement {
    pub fn destination(&self) -> Position {
        match self {
            UnitMovement::Investigated { to, .. } | UnitMovement::Wandered { to, .. } => *to,
        }
    }
}

/// Moves one unsupervised unit per call.
#[derive(Clone, Copy)]
pub struct RelicSeeker<'a> {
    catalogue: &'a Catalogue,
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> RelicSeeker<'a> {
    pub fn new(catalogue: &'a Catalogue, config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self {
            catalogue,
            config,
            rng,
        }
    }

    /// Runs the unit's turn. Returns `None` when the unit had no stamina left
    /// (or does not exist) and nothing changed.
    pub fn run(
        &self,
        board: &mut Board,
        player: &mut Player,
        unit_index: usize,
        obstructions: &Obstructions,
        rolls: UnitRolls,
    ) -> Option<UnitMovement> {
        let unit = player.units.get(unit_index)?;
        let stamina = unit.remaining_stamina;
        if stamina == 0 {
            return None;
        }
        let from = unit.location;
        if !board.contains(from) {
            tracing::warn!(unit = %unit.plan.name, %from, "RelicSeeker: unit outside the board");
        }

        let approach = board
            .nearest_relic(from, stamina)
            .and_then(|relic| Self::approach_tile(board, from, relic, obstructions).map(|to| (relic, to)));

        let movement = match approach {
            Some((relic, to)) => {
                player.units[unit_index].location = to;
                let roll = self.rng.roll_percent(rolls.seed(roll_context::INVESTIGATION));
                let outcome = investigate_relic(
                    player,
                    unit_index,
                    relic,
                    roll,
                    board,
                    self.catalogue,
                    self.config,
                );
                board.set_relic(relic, false);

                tracing::debug!(%from, %to, %relic, roll, ?outcome, "RelicSeeker: investigated relic");
                UnitMovement::Investigated {
                    from,
                    to,
                    relic,
                    outcome,
                }
            }
            None => {
                let to = self.wander(board, from, stamina, obstructions, rolls);
                player.units[unit_index].location = to;

                tracing::debug!(%from, %to, "RelicSeeker: no reachable relic, wandering");
                UnitMovement::Wandered { from, to }
            }
        };

        player.units[unit_index].remaining_stamina = 0;
        Some(movement)
    }

    /// First free orthogonal neighbour of `relic` no farther from `from` than
    /// the relic itself, nearest first.
    pub fn approach_tile(
        board: &Board,
        from: Position,
        relic: Position,
        obstructions: &Obstructions,
    ) -> Option<Position> {
        let reach = from.chebyshev_distance(relic);
        let mut tiles: Vec<Position> = relic
            .orthogonal_neighbours()
            .into_iter()
            .filter(|tile| tile.chebyshev_distance(from) <= reach)
            .collect();
        tiles.sort_by_key(|tile| tile.chebyshev_distance(from));

        tiles
            .into_iter()
            .find(|tile| board.contains(*tile) && !obstructions.contains(*tile))
    }

    /// Random destination within `stamina`, clamped to the board. Stays put
    /// when the destination is blocked or holds a relic.
    fn wander(
        &self,
        board: &Board,
        from: Position,
        stamina: u32,
        obstructions: &Obstructions,
        rolls: UnitRolls,
    ) -> Position {
        let reach = board.reach(stamina) as i32;
        let dx = self
            .rng
            .range_i32(rolls.seed(roll_context::MOVE_X), -reach, reach);
        let dy = self
            .rng
            .range_i32(rolls.seed(roll_context::MOVE_Y), -reach, reach);

        let target = board.dimensions().clamp(from.offset(dx, dy));
        if obstructions.contains(target) || board.is_relic(target) {
            from
        } else {
            target
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_prefers_nearest_neighbour() {
        let board = Board::filled(game_core::MapDimensions::new(20, 20), Default::default());
        let tile = RelicSeeker::approach_tile(
            &board,
            Position::new(10, 5),
            Position::new(10, 8),
            &Obstructions::new(),
        );
        assert_eq!(tile, Some(Position::new(10, 7)));
    }

    #[test]
    fn approach_skips_blocked_and_off_board_tiles() {
        let board = Board::filled(game_core::MapDimensions::new(20, 20), Default::default());
        let blocked: Obstructions = [Position::new(1, 0)].into_iter().collect();
        let tile = RelicSeeker::approach_tile(&board, Position::new(2, 2), Position::new(0, 0), &blocked);
        assert_eq!(tile, Some(Position::new(0, 1)));
    }

    #[test]
    fn unit_rolls_pack_player_and_unit() {
        let rolls = UnitRolls::new(7, 3, 2, 5);
        assert_eq!(rolls.actor, (2 << 16) | 5);
        assert_ne!(
            rolls.seed(roll_context::MOVE_X),
            rolls.seed(roll_context::MOVE_Y)
        );
    }
}
