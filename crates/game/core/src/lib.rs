//! Deterministic rules and data types for the computer-controlled players.
//!
//! `game-core` defines the canonical data model (catalogue, board, players,
//! settlements, units), the yield calculator, construction and research
//! progress, relic rewards and the seeded random source. It performs no I/O and no logging; the decision engine in
//! `runtime` and the loaders in `game-content` build on the types re-exported
//! here.
pub mod catalogue;
pub mod config;
pub mod env;
pub mod investigation;
pub mod progress;
pub mod scenario;
pub mod state;
pub mod yields;

pub use catalogue::{
    Blessing, BlessingId, BlessingSpec, Catalogue, CatalogueError, CatalogueSpec, Effect,
    Improvement, ImprovementCategory, ImprovementId, ImprovementSpec, Project, ProjectCategory,
    ProjectId, ProjectSpec, UnitPlan, UnitPlanId, UnitPlanSpec,
};
pub use config::{AiTuning, GameConfig, GarrisonTarget, SettlerLevels};
pub use env::{MapDimensions, PcgRng, RngOracle, compute_seed, roll_context};
pub use investigation::{RelicOutcome, investigate_relic};
pub use progress::{
    Completion, advance_construction, advance_research, buyout_construction, buyout_price,
    complete_construction, construction_cost, end_turn,
};
pub use scenario::{PlayerSpec, ScenarioError, ScenarioSpec, SettlementSpec, UnitSpec};
pub use state::{
    AttackStyle, Biome, Board, Construction, ConstructionTarget, EconomicStatus, ExpansionStyle,
    Faction, GameState, HarvestStatus, OngoingBlessing, Player, Playstyle, Position, Quad,
    Settlement, Unit,
};
pub use yields::{Resource, SettlementYield, Totals, YieldCalculator, YieldMode};
