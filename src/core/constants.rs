//! Default tuning for the simulation.
//!
//! Velocities and accelerations are expressed per tick, not per second.
//! A tick is one fixed step of `TICK_INTERVAL_MS`.

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 20;
/// Most ticks a single frame may catch up on after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Playfield
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Bird
pub const BIRD_SIZE: f64 = 20.0;
pub const GRAVITY: f64 = 1.0;
pub const JUMP_IMPULSE: f64 = -10.0;

// Pipes
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_MIN_MARGIN: f64 = 100.0;
pub const PIPE_VELOCITY: f64 = 3.0;
pub const PIPE_SPAWN_SPACING: f64 = 300.0;

// Scoring
pub const SCORE_PER_PAIR: u32 = 100;
