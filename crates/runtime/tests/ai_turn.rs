mod common;

use std::path::PathBuf;

use common::*;
use game_content::{ContentFactory, reference_config};
use game_core::{ConstructionTarget, GameState, PcgRng, Position, end_turn};
use runtime::{AiDecision, AiTurn, UnitMovement};

fn skirmish() -> (game_core::Catalogue, GameState) {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
    let factory = ContentFactory::new(data);
    let catalogue = factory.load_catalogue().expect("catalogue loads");
    let state = factory
        .load_scenario("skirmish", &catalogue)
        .expect("scenario builds");
    (catalogue, state)
}

fn built(catalogue: &game_core::Catalogue, state: &GameState, player: usize) -> Option<String> {
    state.players[player].settlements[0]
        .current_target()
        .map(|target| target_name(catalogue, target))
}

#[test]
fn first_turn_decides_for_every_computer_player() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");
    let human_before = state.players[3].clone();

    let decisions = AiTurn::new(&catalogue, &config, &PcgRng).run(&mut state);

    assert!(decisions.iter().all(|d| d.player() < 3));
    assert_eq!(state.players[3], human_before);

    // Expansionist at level 3 founds a new settlement.
    assert_eq!(built(&catalogue, &state, 0).as_deref(), Some("Settler"));
    // Defensive with a healer but one fighter short of three.
    assert_eq!(built(&catalogue, &state, 1).as_deref(), Some("Warrior"));
    // No units anywhere, and the faction never settles.
    assert_eq!(built(&catalogue, &state, 2).as_deref(), Some("Warrior"));

    let blessing_of = |p: usize| {
        state.players[p]
            .ongoing_blessing
            .and_then(|ongoing| catalogue.blessing(ongoing.blessing))
            .map(|b| b.key.as_str())
    };
    assert_eq!(blessing_of(0), Some("civic_medicine"));
    assert_eq!(blessing_of(1), Some("rudimentary_explosives"));
    assert!(blessing_of(2).is_some());
}

#[test]
fn units_near_relics_investigate_them() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");

    let decisions = AiTurn::new(&catalogue, &config, &PcgRng).run(&mut state);

    let moves: Vec<_> = decisions
        .iter()
        .filter_map(|d| match d {
            AiDecision::Unit {
                player, movement, ..
            } => Some((*player, *movement)),
            _ => None,
        })
        .collect();
    assert_eq!(moves.len(), 2);

    assert_eq!(state.players[0].units[0].location, Position::new(13, 10));
    assert_eq!(state.players[1].units[0].location, Position::new(42, 40));
    assert!(!state.board.is_relic(Position::new(14, 10)));
    assert!(!state.board.is_relic(Position::new(43, 40)));
    assert!(state.board.is_relic(Position::new(20, 60)));
    assert!(
        moves
            .iter()
            .all(|(_, m)| matches!(m, UnitMovement::Investigated { .. }))
    );
    assert!(state.players[..3]
        .iter()
        .flat_map(|p| p.units.iter())
        .all(|u| u.remaining_stamina == 0));
}

#[test]
fn second_pass_without_refresh_changes_nothing() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");
    let turn = AiTurn::new(&catalogue, &config, &PcgRng);

    turn.run(&mut state);
    let after_first = state.clone();
    let decisions = turn.run(&mut state);

    assert!(decisions.is_empty());
    assert_eq!(state, after_first);
}

#[test]
fn turns_are_reproducible() {
    let (catalogue, start) = skirmish();
    let config = reference_config().expect("config");
    let turn = AiTurn::new(&catalogue, &config, &PcgRng);

    let play = |mut state: GameState| {
        let mut log = Vec::new();
        for _ in 0..5 {
            state.refresh_units();
            log.extend(turn.run(&mut state));
            end_turn(&catalogue, &mut state);
            state.turn += 1;
        }
        (state, log)
    };

    let (first_state, first_log) = play(start.clone());
    let (second_state, second_log) = play(start);
    assert_eq!(first_log, second_log);
    assert_eq!(first_state, second_state);
}

#[test]
fn finished_settler_is_built_once_and_deployed() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");
    let turn = AiTurn::new(&catalogue, &config, &PcgRng);
    let settler = catalogue.unit_plan_id("Settler").expect("settler");

    let mut log = Vec::new();
    for _ in 0..10 {
        state.refresh_units();
        log.extend(turn.run(&mut state));
        end_turn(&catalogue, &mut state);
        state.turn += 1;
    }

    let valoria = &state.players[0];
    assert!(valoria.settlements[0].produced_settler);
    assert!(valoria.all_units().any(|unit| unit.plan_id == settler));

    let settler_orders = log
        .iter()
        .filter(|d| {
            matches!(
                d,
                AiDecision::Construction {
                    player: 0,
                    target: ConstructionTarget::UnitPlan(id),
                    ..
                } if *id == settler
            )
        })
        .count();
    assert_eq!(settler_orders, 1);
    assert!(
        log.iter()
            .any(|d| matches!(d, AiDecision::Deployment { player: 0, .. }))
    );
}

#[test]
fn rich_players_buy_out_their_construction() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");
    state.players[1].wealth = 500.0;

    let decisions = AiTurn::new(&catalogue, &config, &PcgRng).run(&mut state);

    let bought: Vec<_> = decisions
        .iter()
        .filter_map(|d| match d {
            AiDecision::Buyout {
                player: 1,
                target,
                price,
                ..
            } => Some((target_name(&catalogue, *target), *price)),
            _ => None,
        })
        .collect();
    assert_eq!(bought, vec![("Warrior".to_string(), 25.0)]);
    assert_eq!(state.players[1].wealth, 475.0);
    assert_eq!(state.players[1].settlements[0].garrison.len(), 2);
}

#[test]
fn state_round_trips_through_serde() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");
    AiTurn::new(&catalogue, &config, &FixedRng(12)).run(&mut state);

    let json = serde_json::to_string(&state).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
    assert!(matches!(
        restored.players[0].settlements[0].current_target(),
        Some(ConstructionTarget::UnitPlan(_))
    ));
}

#[test]
fn loaded_settlements_stay_within_bounds() {
    let mut json = serde_json::to_value(settlement(4, 60.0)).expect("serialize");
    json["satisfaction"] = serde_json::json!(250.0);
    json["level"] = serde_json::json!(0);
    let restored: game_core::Settlement = serde_json::from_value(json.clone()).expect("deserialize");
    assert_eq!(restored.satisfaction(), 100.0);
    assert_eq!(restored.level(), 1);

    json["satisfaction"] = serde_json::json!(-12.5);
    json["level"] = serde_json::json!(40);
    let restored: game_core::Settlement = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored.satisfaction(), 0.0);
    assert_eq!(restored.level(), 10);
}

#[test]
fn decisions_render_for_notifications() {
    let (catalogue, mut state) = skirmish();
    let config = reference_config().expect("config");

    let decisions = AiTurn::new(&catalogue, &config, &FixedRng(12)).run(&mut state);
    let lines: Vec<String> = decisions.iter().map(ToString::to_string).collect();

    assert!(lines.iter().any(|line| line.contains("researches blessing")));
    assert!(lines.iter().any(|line| line.contains("builds")));
    assert!(lines.iter().any(|line| line.contains("investigates")));
}
