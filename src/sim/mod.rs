//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (birds and pipes in spawn order)
//! - Drawing only through the `Surface` trait

pub mod autopilot;
pub mod bird;
pub mod ground;
pub mod pipe;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use ground::Ground;
pub use pipe::Pipe;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
