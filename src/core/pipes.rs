//! Pipe scrolling, recycling and spawn timing.

use super::types::{PairId, PipeField};

/// Scroll every obstacle left by `velocity`.
pub fn advance(field: &mut PipeField, velocity: f64) {
    field.shift(-velocity);
}

/// Drop every pair whose members have both left the screen.
///
/// Works pair by pair, so one member can never outlive the other.
/// Returns the recycled ids; calling again right away returns nothing.
pub fn recycle(field: &mut PipeField) -> Vec<PairId> {
    let removed = field.retain_pairs(|pair| !pair.is_off_screen());
    for id in &removed {
        log::debug!("recycled pair {id}");
    }
    removed
}

/// A new pair is due when there is none, or the newest one has travelled
/// more than `spawn_spacing` in from the right edge.
pub fn needs_spawn(field: &PipeField, screen_width: f64, spawn_spacing: f64) -> bool {
    match field.newest() {
        None => true,
        Some(newest) => newest.x() < screen_width - spawn_spacing,
    }
}
