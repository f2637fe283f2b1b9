//! Bird physics.
//!
//! Units are per tick. `dt` is measured in ticks, so a fixed-step driver
//! passes [`FIXED_DT`] and reproduces the discrete integer-step motion.

use super::types::Bird;

/// One tick of simulated time.
pub const FIXED_DT: f64 = 1.0;

/// Semi-implicit Euler step: velocity first, then position with the new velocity.
pub fn integrate(bird: Bird, gravity: f64, dt: f64) -> Bird {
    let mut next = bird;
    next.velocity = bird.velocity + gravity * dt;
    next.y += next.velocity * dt;
    next
}

/// Flap. Overrides the velocity rather than adding to it.
pub fn jump(bird: &mut Bird, impulse: f64) {
    bird.velocity = impulse;
}
