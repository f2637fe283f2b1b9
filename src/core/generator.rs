//! Obstacle pair generation.

use super::types::{Obstacle, ObstacleKind, PairId};
use crate::config::GameConfig;
use rand::Rng;

/// Draw the top edge of a new gap.
///
/// Uniform over `[min_margin, screen_height - gap_height - min_margin]`, so
/// both pipes keep at least `min_margin` of length. A zero-width range yields
/// its single value and an inverted one collapses to `min_margin`.
pub fn draw_gap_top<R: Rng>(rng: &mut R, config: &GameConfig) -> f64 {
    let (min, max) = config.gap_top_bounds();
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Build a `(top, bottom)` obstacle pair just off the right edge of the screen.
pub fn spawn_pair<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
    pair_id: PairId,
) -> (Obstacle, Obstacle) {
    let gap_top = draw_gap_top(rng, config);
    let gap_bottom = gap_top + config.gap_height;

    let top = Obstacle {
        x: config.screen_width,
        top: 0.0,
        height: gap_top,
        width: config.pipe_width,
        pair_id,
        kind: ObstacleKind::Top,
    };
    let bottom = Obstacle {
        x: config.screen_width,
        top: gap_bottom,
        height: config.screen_height - gap_bottom,
        width: config.pipe_width,
        pair_id,
        kind: ObstacleKind::Bottom,
    };

    log::debug!(
        "spawned pair {} with gap {:.1}..{:.1}",
        pair_id,
        gap_top,
        gap_bottom
    );
    (top, bottom)
}
