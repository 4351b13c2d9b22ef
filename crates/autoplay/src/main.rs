//! Headless driver for the computer players.
//!
//! Loads a data directory, builds a scenario and lets the AI play a number of
//! turns, logging every decision and every finished construction or blessing.
//! Run with: `cargo run -p autoplay -- --scenario skirmish --turns 10`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::ContentFactory;
use game_core::{Catalogue, Completion, GameState, PcgRng, end_turn};
use runtime::AiTurn;

/// Let the computer players run a scenario
#[derive(Parser)]
#[command(name = "autoplay")]
#[command(about = "Runs computer-controlled turns on a scenario", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory holding catalogue.ron, config.toml and scenarios/
    #[arg(long, env = "AUTOPLAY_DATA_DIR", default_value = "crates/game/content/data")]
    data: PathBuf,

    /// Scenario name under `<data>/scenarios/`
    #[arg(long, default_value = "skirmish")]
    scenario: String,

    /// Number of turns to play
    #[arg(long, default_value_t = 10)]
    turns: u64,

    /// Override the scenario's game seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AUTOPLAY_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let factory = ContentFactory::new(&cli.data);
    let config = factory
        .load_config()
        .with_context(|| format!("loading config from {}", cli.data.display()))?;
    let catalogue = factory
        .load_catalogue()
        .with_context(|| format!("loading catalogue from {}", cli.data.display()))?;
    let mut state = factory
        .load_scenario(&cli.scenario, &catalogue)
        .with_context(|| format!("loading scenario '{}'", cli.scenario))?;
    if let Some(seed) = cli.seed {
        state.game_seed = seed;
    }

    tracing::info!(
        scenario = %cli.scenario,
        seed = state.game_seed,
        players = state.players.len(),
        relics = state.board.relic_count(),
        "Scenario loaded"
    );

    let rng = PcgRng;
    let turn = AiTurn::new(&catalogue, &config, &rng);
    for _ in 0..cli.turns {
        state.refresh_units();
        for decision in turn.run(&mut state) {
            tracing::info!(turn = state.turn, "{decision}");
        }
        for completion in end_turn(&catalogue, &mut state) {
            log_completion(&catalogue, &state, state.turn, completion);
        }
        state.turn += 1;
    }

    print_summary(&catalogue, &state);
    Ok(())
}

fn print_summary(catalogue: &Catalogue, state: &GameState) {
    println!("After {} turns:", state.turn.saturating_sub(1));
    for player in &state.players {
        let researching = player
            .ongoing_blessing
            .and_then(|ongoing| catalogue.blessing(ongoing.blessing))
            .map_or("nothing", |b| b.name.as_str());
        println!(
            "  {} ({}) wealth {:.0}, {} blessings, researching {}, {} units",
            player.name,
            player.faction,
            player.wealth,
            player.blessings.len(),
            researching,
            player.units.len(),
        );
        for settlement in &player.settlements {
            let building = settlement
                .current_target()
                .map(|target| describe(catalogue, target))
                .unwrap_or_else(|| "nothing".to_string());
            println!(
                "    {} level {} at {}: building {}",
                settlement.name,
                settlement.level(),
                settlement.location,
                building
            );
        }
    }
}

fn log_completion(catalogue: &Catalogue, state: &GameState, turn: u64, completion: Completion) {
    match completion {
        Completion::Construction {
            player,
            settlement,
            target,
        } => {
            let Some(owner) = state.players.get(player) else {
                return;
            };
            let settlement = owner
                .settlements
                .get(settlement)
                .map_or("unknown", |s| s.name.as_str());
            tracing::info!(
                turn,
                player = %owner.name,
                settlement,
                "finished {}",
                describe(catalogue, target)
            );
        }
        Completion::Blessing { player, blessing } => {
            let Some(owner) = state.players.get(player) else {
                return;
            };
            let name = catalogue.blessing(blessing).map_or("unknown", |b| b.name.as_str());
            tracing::info!(turn, player = %owner.name, "blessed with {name}");
        }
    }
}

fn describe(catalogue: &Catalogue, target: game_core::ConstructionTarget) -> String {
    use game_core::ConstructionTarget;

    let name = match target {
        ConstructionTarget::Improvement(id) => catalogue.improvement(id).map(|i| i.name.as_str()),
        ConstructionTarget::Project(id) => catalogue.project(id).map(|p| p.name.as_str()),
        ConstructionTarget::UnitPlan(id) => catalogue.unit_plan(id).map(|u| u.name.as_str()),
    };
    name.unwrap_or("unknown").to_string()
}
