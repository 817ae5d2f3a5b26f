//! Obstacle motion: Euler integration plus boundary reflection
//!
//! Reflection happens after the overshoot, so an obstacle may sit past the
//! boundary by up to one step before heading back in. Position is never
//! clamped; this matches the near-bounded guarantee
//! |pos| <= bound + OBSTACLE_SPEED.

use crate::consts::{BOUND_X, BOUND_Y};

use super::state::Obstacle;

/// Advance one obstacle by one tick
pub fn advance(obstacle: &mut Obstacle) {
    obstacle.body.position.x += obstacle.velocity.x;
    obstacle.body.position.y += obstacle.velocity.y;

    if obstacle.body.position.x.abs() > BOUND_X {
        obstacle.velocity.x = -obstacle.velocity.x;
    }
    if obstacle.body.position.y.abs() > BOUND_Y {
        obstacle.velocity.y = -obstacle.velocity.y;
    }
}
