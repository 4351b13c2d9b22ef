//! Shared fixtures for the decision engine tests.
#![allow(dead_code)]

use std::collections::BTreeSet;

use game_content::reference_catalogue;
use game_core::{
    AttackStyle, Biome, BlessingId, Board, Catalogue, ExpansionStyle, Faction, GameConfig,
    MapDimensions, Player, Playstyle, Position, Quad, RngOracle, Settlement, Unit,
};
use runtime::{ConstructionPlanner, PlannerContext};

/// Quad worked by the fixture settlement.
pub const WORKED_QUAD: Position = Position::new(5, 5);
pub const SETTLEMENT_LOCATION: Position = Position::new(4, 4);
pub const BOARD_DIMENSIONS: MapDimensions = MapDimensions::new(90, 80);

/// RNG double that returns the same value for every seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

pub fn catalogue() -> Catalogue {
    reference_catalogue().expect("reference catalogue compiles")
}

pub fn blessing(catalogue: &Catalogue, key: &str) -> BlessingId {
    catalogue
        .blessing_id(key)
        .unwrap_or_else(|| panic!("unknown blessing {key}"))
}

pub fn all_blessings(catalogue: &Catalogue) -> BTreeSet<BlessingId> {
    catalogue.blessings().map(|(id, _)| id).collect()
}

pub fn blessings_except(catalogue: &Catalogue, keys: &[&str]) -> BTreeSet<BlessingId> {
    catalogue
        .blessings()
        .filter(|(_, b)| !keys.contains(&b.key.as_str()))
        .map(|(id, _)| id)
        .collect()
}

pub fn blessings_of(catalogue: &Catalogue, keys: &[&str]) -> BTreeSet<BlessingId> {
    keys.iter().map(|key| blessing(catalogue, key)).collect()
}

/// 90x80 board of barren quads with one worked quad at [`WORKED_QUAD`].
pub fn board(wealth: i32, harvest: i32, zeal: i32, fortune: i32) -> Board {
    let mut board = Board::filled(BOARD_DIMENSIONS, Quad::default());
    if let Some(quad) = board.quad_mut(WORKED_QUAD) {
        *quad = Quad::new(Biome::Forest, wealth, harvest, zeal, fortune);
    }
    board
}

pub fn unit(catalogue: &Catalogue, plan: &str, location: Position) -> Unit {
    let id = catalogue
        .unit_plan_id(plan)
        .unwrap_or_else(|| panic!("unknown plan {plan}"));
    let plan = catalogue.unit_plan(id).expect("plan exists");
    Unit::new(id, plan, location)
}

pub fn settlement(level: u8, satisfaction: f64) -> Settlement {
    Settlement::new("Fixture", SETTLEMENT_LOCATION, vec![WORKED_QUAD])
        .with_level(level)
        .with_satisfaction(satisfaction)
}

/// Capitalist computer player with one settlement and a deployed warrior.
pub fn player(
    catalogue: &Catalogue,
    attacking: AttackStyle,
    expansion: ExpansionStyle,
    blessings: BTreeSet<BlessingId>,
    settlement: Settlement,
) -> Player {
    let mut player = Player::new("Fixture", Faction::Capitalists)
        .with_playstyle(Playstyle::new(attacking, expansion));
    player.blessings = blessings;
    player.settlements.push(settlement);
    player
        .units
        .push(unit(catalogue, "Warrior", Position::new(30, 30)));
    player
}

pub fn neutral_player(
    catalogue: &Catalogue,
    blessings: BTreeSet<BlessingId>,
    settlement: Settlement,
) -> Player {
    player(
        catalogue,
        AttackStyle::Neutral,
        ExpansionStyle::Neutral,
        blessings,
        settlement,
    )
}

pub fn context<'a>(
    catalogue: &'a Catalogue,
    config: &'a GameConfig,
    board: &Board,
    player: &'a Player,
) -> PlannerContext<'a> {
    PlannerContext::new(catalogue, config, board, false, player, &player.settlements[0])
}

/// Plans the first settlement as a computer player and returns the target name.
pub fn plan(catalogue: &Catalogue, board: &Board, player: &mut Player) -> Option<String> {
    let config = GameConfig::default();
    let target = ConstructionPlanner::new(catalogue, &config).plan_settlement(board, false, player, 0)?;
    Some(target_name(catalogue, target))
}

pub fn target_name(catalogue: &Catalogue, target: game_core::ConstructionTarget) -> String {
    use game_core::ConstructionTarget::*;
    match target {
        Improvement(id) => catalogue.improvement(id).map(|i| i.name.clone()),
        Project(id) => catalogue.project(id).map(|p| p.name.clone()),
        UnitPlan(id) => catalogue.unit_plan(id).map(|u| u.name.clone()),
    }
    .unwrap_or_default()
}

pub fn dimensions() -> MapDimensions {
    BOARD_DIMENSIONS
}
