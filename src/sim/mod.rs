//! Simulation module
//!
//! All gameplay state and per-tick logic lives here. No rendering or
//! platform dependencies.

pub mod state;
pub mod tick;

pub use state::{Bullet, GameState, Player, PlayerId, start_position};
pub use tick::tick;
