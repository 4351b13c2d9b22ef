//! Decision providers for the different kinds of computer-controlled choice.

pub mod ai;

pub use ai::{
    BlessingSelector, Buyout, BuyoutPolicy, ConstructionPlanner, Deployment, DeploymentPolicy,
    GarrisonPolicy, Obstructions, PlannerContext, RelicSeeker, SettlerPolicy, UnitMovement,
    UnitRolls, first_max,
};
