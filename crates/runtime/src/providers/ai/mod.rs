//! Decision engine for computer-controlled players.
//!
//! Each turn a computer player makes four kinds of decision:
//!
//! 1. **Blessing**: what to research next ([`BlessingSelector`])
//! 2. **Construction**: what each idle settlement builds ([`ConstructionPlanner`],
//!    consulting [`SettlerPolicy`] and [`GarrisonPolicy`] first), and whether
//!    ongoing work is worth buying out ([`BuyoutPolicy`])
//! 3. **Deployment**: which garrisoned units leave their settlement
//!    ([`DeploymentPolicy`])
//! 4. **Movement**: where each unit without orders goes ([`RelicSeeker`])
//!
//! # Core Components
//!
//! - [`PlannerContext`]: Cached totals and availability for one settlement
//! - [`first_max`]: The shared first-wins maximum used by every comparison
//!
//! All decisions are deterministic. The only randomness sits behind the
//! [`game_core::RngOracle`] handed to the relic seeker.

pub mod blessing;
pub mod buyout;
pub mod construction;
pub mod context;
pub mod deployment;
pub mod garrison;
pub mod relic;
pub mod scoring;
pub mod settler;

// Re-export public API
pub use blessing::BlessingSelector;
pub use buyout::{Buyout, BuyoutPolicy};
pub use construction::ConstructionPlanner;
pub use context::PlannerContext;
pub use deployment::{Deployment, DeploymentPolicy};
pub use garrison::GarrisonPolicy;
pub use relic::{Obstructions, RelicSeeker, UnitMovement, UnitRolls};
pub use scoring::first_max;
pub use settler::SettlerPolicy;
