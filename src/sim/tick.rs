//! Per-frame simulation update
//!
//! One tick: player movement from held input, position clamp, hard camera
//! follow, collision check, then obstacle advance. The whole body is skipped
//! unless the session is running; the frame scheduler keeps firing either way.

use glam::Vec3;

use crate::consts::*;

use super::input::{Direction, InputState};
use super::state::{GameSession, Phase};
use super::{collision, motion};

/// Advance the session by one logical tick
pub fn tick(session: &mut GameSession, input: &InputState) {
    if session.phase != Phase::Running {
        return;
    }

    update_player(session, input);

    for obstacle in &mut session.obstacles {
        motion::advance(obstacle);
    }
}

/// Apply held input to the player, clamp to the play area, drag the camera
/// along, then check collisions.
fn update_player(session: &mut GameSession, input: &InputState) {
    let position = &mut session.player.position;

    // Diagonal input is intentionally unnormalized: both axes move at full speed.
    if input.held(Direction::Up) {
        position.y += PLAYER_SPEED;
    }
    if input.held(Direction::Down) {
        position.y -= PLAYER_SPEED;
    }
    if input.held(Direction::Left) {
        position.x -= PLAYER_SPEED;
    }
    if input.held(Direction::Right) {
        position.x += PLAYER_SPEED;
    }

    position.x = position.x.clamp(-BOUND_X, BOUND_X);
    position.y = position.y.clamp(-BOUND_Y, BOUND_Y);

    // Hard follow: no smoothing, constant z distance.
    session.camera.position = Vec3::new(position.x, position.y, CAMERA_DISTANCE);

    check_collisions(session);
}

/// Penalize the first overlapping obstacle, edge-triggered: a contact that
/// persists across ticks (obstacle sitting on the spawn point) costs points
/// only once, until contact breaks.
fn check_collisions(session: &mut GameSession) {
    let hit = collision::first_hit(&session.player, &session.obstacles);

    if let Some(index) = hit {
        if !session.in_contact {
            session.apply_collision();
            log::debug!("hit obstacle {index}, score {}", session.score);
            // The penalty teleported the player, so contact is re-evaluated
            // at the respawn point: a stale overlap from the old position
            // must not mask the next hit.
            session.in_contact =
                collision::first_hit(&session.player, &session.obstacles).is_some();
            return;
        }
    }

    session.in_contact = hit.is_some();
}
