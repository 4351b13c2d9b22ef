mod common;

use std::collections::BTreeSet;

use common::*;
use game_core::{AttackStyle, Board, ExpansionStyle, GameConfig, Player, Position, Settlement};
use runtime::{Deployment, DeploymentPolicy, Obstructions};

fn garrisoned(attacking: AttackStyle, garrison: usize) -> Player {
    let catalogue = catalogue();
    let mut settlement = settlement(2, 60.0);
    for _ in 0..garrison {
        settlement
            .garrison
            .push(unit(&catalogue, "Warrior", SETTLEMENT_LOCATION));
    }
    player(
        &catalogue,
        attacking,
        ExpansionStyle::Neutral,
        BTreeSet::new(),
        settlement,
    )
}

fn deploy(player: &mut Player) -> Option<Deployment> {
    let config = GameConfig::default();
    let board = board(1, 1, 1, 1);
    let mut obstructions = Obstructions::new();
    DeploymentPolicy::new(&config).run(&board, player, 0, &mut obstructions)
}

#[test]
fn non_defensive_players_deploy_garrisoned_units() {
    for attacking in [AttackStyle::Aggressive, AttackStyle::Neutral] {
        let mut player = garrisoned(attacking, 1);
        let deployment = deploy(&mut player).expect("unit deployed");

        assert_eq!(deployment.unit, 1);
        assert_eq!(deployment.from, SETTLEMENT_LOCATION);
        assert_eq!(deployment.to, Position::new(3, 3));
        assert!(player.settlements[0].garrison.is_empty());
        assert_eq!(player.units[1].location, Position::new(3, 3));
    }
}

#[test]
fn defensive_players_hold_a_healthy_garrison() {
    let mut player = garrisoned(AttackStyle::Defensive, 3);
    assert_eq!(deploy(&mut player), None);
    assert_eq!(player.settlements[0].garrison.len(), 3);
    assert_eq!(player.units.len(), 1);
}

#[test]
fn defensive_players_deploy_when_besieged() {
    let mut player = garrisoned(AttackStyle::Defensive, 1);
    player.settlements[0].besieged = true;
    assert!(deploy(&mut player).is_some());
}

#[test]
fn defensive_players_deploy_below_max_strength() {
    let mut player = garrisoned(AttackStyle::Defensive, 1);
    player.settlements[0].strength = Settlement::DEFAULT_STRENGTH - 10.0;
    assert!(deploy(&mut player).is_some());
}

#[test]
fn defensive_players_deploy_from_a_crowded_garrison() {
    let mut player = garrisoned(AttackStyle::Defensive, 4);
    assert!(deploy(&mut player).is_some());
    assert_eq!(player.settlements[0].garrison.len(), 3);
}

#[test]
fn empty_garrisons_and_human_players_stay_put() {
    let mut player = garrisoned(AttackStyle::Aggressive, 0);
    assert_eq!(deploy(&mut player), None);

    let mut human = garrisoned(AttackStyle::Aggressive, 1);
    human.playstyle = None;
    assert_eq!(deploy(&mut human), None);
    assert_eq!(human.settlements[0].garrison.len(), 1);
}

#[test]
fn landing_skips_relics_units_and_the_board_edge() {
    let mut board = Board::filled(dimensions(), game_core::Quad::default());
    board.set_relic(Position::new(1, 0), true);
    let corner = Settlement::new("Corner", Position::new(0, 0), vec![Position::new(0, 0)]);
    let obstructions: Obstructions = [Position::new(0, 1)].into_iter().collect();

    assert_eq!(
        DeploymentPolicy::landing(&board, &corner, &obstructions),
        Some(Position::new(1, 1))
    );
}

#[test]
fn surrounded_settlements_keep_their_garrison() {
    let mut player = garrisoned(AttackStyle::Aggressive, 1);
    let config = GameConfig::default();
    let board = board(1, 1, 1, 1);
    let mut obstructions: Obstructions = game_core::state::spiral(SETTLEMENT_LOCATION, 1).collect();

    assert_eq!(
        DeploymentPolicy::new(&config).run(&board, &mut player, 0, &mut obstructions),
        None
    );
    assert_eq!(player.settlements[0].garrison.len(), 1);
}
