//! Decision engine for the computer-controlled players.
//!
//! This crate turns the rules in `game-core` into choices: what each settlement
//! builds, which blessing a player researches and where idle units go. It
//! performs no I/O; callers own the [`game_core::GameState`] and apply the
//! engine once per turn through [`AiTurn`].
//!
//! Modules are organized by responsibility:
//! - [`providers`] hosts the individual decision components
//! - [`turn`] drives them in turn order and reports what was decided
pub mod providers;
pub mod turn;

pub use providers::{
    BlessingSelector, Buyout, BuyoutPolicy, ConstructionPlanner, Deployment, DeploymentPolicy,
    GarrisonPolicy, Obstructions, PlannerContext, RelicSeeker, SettlerPolicy, UnitMovement,
    UnitRolls, first_max,
};
pub use turn::{AiDecision, AiTurn};
