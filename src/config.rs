//! Game configuration.
//!
//! Every tunable of the simulation lives in [`GameConfig`]. Values are read
//! from an optional JSON file; any field left out keeps its default. Nothing
//! is ever written back.

use crate::core::constants::*;
use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub bird_size: f64,
    /// Fixed column of the bird. Defaults to a fifth of the screen width.
    pub bird_x: Option<f64>,
    /// Row the bird starts (and restarts) at. Defaults to mid-screen.
    pub bird_start_y: Option<f64>,
    /// Velocity change per tick (positive = downward).
    pub gravity: f64,
    /// Velocity override applied on jump (negative = upward).
    pub jump_impulse: f64,

    pub pipe_width: f64,
    pub gap_height: f64,
    /// Minimum pipe length kept above and below every gap.
    pub min_margin: f64,
    /// Leftward scroll per tick.
    pub pipe_velocity: f64,
    /// Distance the newest pair must travel from the right edge before the next spawns.
    pub spawn_spacing: f64,

    pub score_per_pair: u32,
    /// Credit a pair passed on the same tick the bird crashes.
    pub score_on_terminal_tick: bool,

    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_size: BIRD_SIZE,
            bird_x: None,
            bird_start_y: None,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            gap_height: PIPE_GAP,
            min_margin: PIPE_MIN_MARGIN,
            pipe_velocity: PIPE_VELOCITY,
            spawn_spacing: PIPE_SPAWN_SPACING,
            score_per_pair: SCORE_PER_PAIR,
            score_on_terminal_tick: true,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    pub fn bird_x(&self) -> f64 {
        self.bird_x.unwrap_or(self.screen_width / 5.0)
    }

    pub fn bird_start_y(&self) -> f64 {
        self.bird_start_y.unwrap_or(self.screen_height / 2.0)
    }

    /// Lowest and highest admissible gap top. Never inverted once validated.
    pub fn gap_top_bounds(&self) -> (f64, f64) {
        let min = self.min_margin;
        let max = self.screen_height - self.gap_height - self.min_margin;
        (min, max.max(min))
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("bird_size", self.bird_size)?;
        positive("pipe_width", self.pipe_width)?;
        positive("gap_height", self.gap_height)?;
        positive("pipe_velocity", self.pipe_velocity)?;
        positive("spawn_spacing", self.spawn_spacing)?;

        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(invalid("gravity", "must be finite and not negative"));
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse >= 0.0 {
            return Err(invalid("jump_impulse", "must be negative (upward)"));
        }
        if !self.min_margin.is_finite() || self.min_margin < 0.0 {
            return Err(invalid("min_margin", "must be finite and not negative"));
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be at least 1"));
        }

        let bird_x = self.bird_x();
        if !(0.0..self.screen_width).contains(&bird_x) {
            return Err(invalid(
                "bird_x",
                format!("{bird_x} is outside the screen (0..{})", self.screen_width),
            ));
        }
        let start_y = self.bird_start_y();
        if start_y < 0.0 || start_y + self.bird_size > self.screen_height {
            return Err(invalid(
                "bird_start_y",
                format!("bird would start out of bounds at {start_y}"),
            ));
        }

        if self.gap_height + 2.0 * self.min_margin > self.screen_height {
            return Err(ConfigError::InvertedGapRange {
                gap_height: self.gap_height,
                min_margin: self.min_margin,
                screen_height: self.screen_height,
            });
        }

        Ok(())
    }

    /// Parse a config file. Does not validate.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Platform location of the optional config file, e.g.
    /// `~/.config/flappy/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolve the effective config and validate it.
    ///
    /// An explicit path must exist. Otherwise the platform file is used when
    /// present, and built-in defaults when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    log::info!("loading config from {}", path.display());
                    Self::load_from_file(&path)?
                }
                None => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> String {
        // Serializing plain numbers and bools cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
