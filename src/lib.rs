//! Flappy - fixed-timestep side-scrolling game library
//!
//! Exposes the simulation core for the terminal game, the headless
//! simulator and tests.

pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod ui;

pub use config::GameConfig;
pub use error::ConfigError;
