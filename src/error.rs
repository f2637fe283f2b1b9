//! Error types for startup and configuration.
//!
//! The simulation itself never fails; everything that can go wrong happens
//! before the first tick.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error(
        "pipe gap does not fit: gap {gap_height} + 2 x margin {min_margin} exceeds screen height {screen_height}"
    )]
    InvertedGapRange {
        gap_height: f64,
        min_margin: f64,
        screen_height: f64,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
