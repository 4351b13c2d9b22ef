//! Environment services the engine consults but never owns.
//!
//! Board geometry and the seeded random source live here so decision code
//! can take them as parameters instead of reaching for globals.
mod map;
mod rng;

pub use map::MapDimensions;
pub use rng::{PcgRng, RngOracle, compute_seed, roll_context};
