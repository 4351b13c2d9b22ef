use game_core::{
    Biome, BlessingSpec, Board, Catalogue, CatalogueSpec, Completion, ConstructionTarget, Effect,
    Faction, GameState, ImprovementCategory, ImprovementSpec, MapDimensions, Player, Position,
    ProjectCategory, ProjectSpec, Quad, Settlement, UnitPlanSpec, buyout_construction,
    buyout_price, complete_construction, end_turn,
};

fn catalogue() -> Catalogue {
    Catalogue::compile(CatalogueSpec {
        blessings: vec![BlessingSpec {
            key: "husbandry".into(),
            name: "Husbandry".into(),
            description: String::new(),
            cost: 3.0,
        }],
        improvements: vec![ImprovementSpec {
            name: "Palisade".into(),
            description: String::new(),
            category: ImprovementCategory::Bountiful,
            cost: 10.0,
            tier: 1,
            requires: None,
            effect: Effect {
                harvest: 4,
                satisfaction: 2,
                strength: 5,
                ..Effect::NONE
            },
        }],
        projects: vec![ProjectSpec {
            name: "Feast".into(),
            description: String::new(),
            category: ProjectCategory::Bountiful,
        }],
        unit_plans: vec![UnitPlanSpec {
            name: "Pioneer".into(),
            power: 0.0,
            max_health: 20.0,
            total_stamina: 2,
            cost: 12.0,
            requires: None,
            can_settle: true,
            heals: false,
        }],
    })
    .expect("catalogue compiles")
}

/// Two worked quads yielding (4, 4, 8, 2) between them.
fn board() -> Board {
    let mut board = Board::filled(MapDimensions::new(10, 10), Quad::default());
    for position in [Position::new(1, 1), Position::new(2, 1)] {
        if let Some(quad) = board.quad_mut(position) {
            *quad = Quad::new(Biome::Forest, 2, 2, 4, 1);
        }
    }
    board
}

fn settlement() -> Settlement {
    Settlement::new(
        "Workton",
        Position::new(1, 1),
        vec![Position::new(1, 1), Position::new(2, 1)],
    )
}

fn state_with(player: Player) -> GameState {
    GameState::new(7, board(), vec![player])
}

fn palisade(catalogue: &Catalogue) -> ConstructionTarget {
    ConstructionTarget::Improvement(catalogue.improvement_id("Palisade").expect("palisade"))
}

#[test]
fn improvement_completes_once_zeal_covers_its_cost() {
    let catalogue = catalogue();
    let target = palisade(&catalogue);
    let mut player = Player::new("Builder", Faction::Capitalists);
    let mut town = settlement();
    town.set_current_work(target);
    player.settlements.push(town);
    let mut state = state_with(player);

    assert!(end_turn(&catalogue, &mut state).is_empty());
    let town = &state.players[0].settlements[0];
    assert_eq!(town.current_work.map(|work| work.zeal_consumed), Some(8.0));

    let completions = end_turn(&catalogue, &mut state);
    assert_eq!(
        completions,
        vec![Completion::Construction {
            player: 0,
            settlement: 0,
            target,
        }]
    );

    let player = &state.players[0];
    let town = &player.settlements[0];
    assert_eq!(town.current_work, None);
    assert_eq!(town.improvements.len(), 1);
    assert_eq!(town.satisfaction(), Settlement::DEFAULT_SATISFACTION + 2.0);
    assert_eq!(town.strength, Settlement::DEFAULT_STRENGTH + 5.0);
    assert_eq!(town.max_strength, Settlement::DEFAULT_STRENGTH + 5.0);
    assert_eq!(player.wealth, 8.0);
}

#[test]
fn concentrated_fortifications_count_double() {
    let catalogue = catalogue();
    let mut town = settlement();
    town.set_current_work(palisade(&catalogue));

    complete_construction(&catalogue, Faction::Concentrated, &mut town);
    assert_eq!(town.strength, Settlement::DEFAULT_STRENGTH + 10.0);
    assert_eq!(town.max_strength, Settlement::DEFAULT_STRENGTH + 10.0);
}

#[test]
fn finished_settler_joins_the_garrison() {
    let catalogue = catalogue();
    let plan = catalogue.unit_plan_id("Pioneer").expect("pioneer");
    let mut town = settlement();
    town.set_current_work(ConstructionTarget::UnitPlan(plan));

    let done = complete_construction(&catalogue, Faction::Capitalists, &mut town);
    assert_eq!(done, Some(ConstructionTarget::UnitPlan(plan)));
    assert!(town.produced_settler);
    assert_eq!(town.garrison.len(), 1);
    assert_eq!(town.garrison[0].plan_id, plan);
    assert_eq!(town.garrison[0].location, town.location);
}

#[test]
fn projects_run_until_replaced() {
    let catalogue = catalogue();
    let feast = ConstructionTarget::Project(catalogue.project_id("Feast").expect("feast"));
    let mut player = Player::new("Host", Faction::Capitalists);
    let mut town = settlement();
    town.set_current_work(feast);
    player.settlements.push(town);
    let mut state = state_with(player);

    for _ in 0..5 {
        assert!(end_turn(&catalogue, &mut state).is_empty());
    }
    assert_eq!(state.players[0].settlements[0].current_target(), Some(feast));
    let town = &mut state.players[0].settlements[0];
    assert_eq!(
        complete_construction(&catalogue, Faction::Capitalists, town),
        None
    );
}

#[test]
fn buyout_charges_the_missing_zeal() {
    let catalogue = catalogue();
    let mut player = Player::new("Buyer", Faction::Capitalists);
    let mut town = settlement();
    town.set_current_work(palisade(&catalogue));
    if let Some(work) = town.current_work.as_mut() {
        work.zeal_consumed = 4.0;
    }
    player.settlements.push(town);
    assert_eq!(buyout_price(&catalogue, &player.settlements[0]), Some(6.0));

    player.wealth = 5.0;
    assert_eq!(buyout_construction(&catalogue, &mut player, 0), None);
    assert_eq!(player.wealth, 5.0);
    assert!(player.settlements[0].current_work.is_some());

    player.wealth = 9.0;
    assert_eq!(
        buyout_construction(&catalogue, &mut player, 0),
        Some(palisade(&catalogue))
    );
    assert_eq!(player.wealth, 3.0);
    assert_eq!(player.settlements[0].improvements.len(), 1);
}

#[test]
fn idle_settlements_have_no_buyout_price() {
    let catalogue = catalogue();
    assert_eq!(buyout_price(&catalogue, &settlement()), None);
}

#[test]
fn research_grants_the_blessing_once_paid_for() {
    let catalogue = catalogue();
    let husbandry = catalogue.blessing_id("husbandry").expect("husbandry");
    let mut player = Player::new("Scholar", Faction::Capitalists);
    player.settlements.push(settlement());
    player.begin_blessing(husbandry);
    let mut state = state_with(player);

    assert!(end_turn(&catalogue, &mut state).is_empty());
    assert_eq!(
        end_turn(&catalogue, &mut state),
        vec![Completion::Blessing {
            player: 0,
            blessing: husbandry,
        }]
    );
    let player = &state.players[0];
    assert!(player.has_blessing(husbandry));
    assert!(player.ongoing_blessing.is_none());
}
