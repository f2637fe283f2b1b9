//! Simulation core: obstacle generation, physics, pipe lifecycle,
//! collision, scoring and the game state machine.
//!
//! Nothing in here touches the terminal. The UI reads a [`Snapshot`]
//! between ticks.

pub mod collision;
pub mod constants;
pub mod game;
pub mod game_loop;
pub mod generator;
pub mod physics;
pub mod pipes;
pub mod scoring;
pub mod types;

pub use constants::*;
pub use game::*;
pub use types::*;
