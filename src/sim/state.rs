//! Session state and core simulation types
//!
//! The whole game world lives in one owned [`GameSession`] aggregate so the
//! sim can be driven headless in tests without a display or input host.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for login; no world exists yet
    LoggedOut,
    /// World built, game frozen (initial state after login, and via pause)
    Paused,
    /// Active gameplay
    Running,
}

/// A positioned box in the scene: player or obstacle body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialObject {
    pub position: Vec3,
    /// Bounding box = position ± half_extents
    pub half_extents: Vec3,
}

impl SpatialObject {
    /// Cube at the origin with the given edge length
    pub fn cube(size: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            half_extents: Vec3::splat(size / 2.0),
        }
    }
}

/// A bouncing obstacle. Velocity is assigned once at spawn and persists
/// for the whole session; only its sign changes on boundary reflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: SpatialObject,
    /// Per-tick velocity; z motion does not exist
    pub velocity: Vec2,
}

/// Camera transform, hard-locked to the player each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
        }
    }
}

/// Login validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    EmptyUsername,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::EmptyUsername => write!(f, "Please enter a username."),
        }
    }
}

impl std::error::Error for LoginError {}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Spawn seed for reproducibility
    pub seed: u64,
    pub score: u32,
    /// Displayed but never advances
    pub level: u32,
    pub phase: Phase,
    pub player: SpatialObject,
    pub obstacles: Vec<Obstacle>,
    pub camera: Camera,
    /// Whether the previous tick ended in player/obstacle contact.
    /// Collision penalties fire only on a fresh contact (edge-triggered),
    /// so an obstacle parked on the spawn point costs points once.
    #[serde(default)]
    pub(crate) in_contact: bool,
}

impl GameSession {
    /// Create a logged-out session; the world is built on login
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            level: 1,
            phase: Phase::LoggedOut,
            player: SpatialObject::cube(PLAYER_SIZE),
            obstacles: Vec::new(),
            camera: Camera::default(),
            in_contact: false,
        }
    }

    /// Validate the username and build the world. The session enters
    /// `Paused`; gameplay waits for an explicit start. Returns whether this
    /// call performed the transition: a repeat login on an active session is
    /// a no-op, and callers must not rebuild the world for it.
    pub fn login(&mut self, username: &str) -> Result<bool, LoginError> {
        if username.trim().is_empty() {
            return Err(LoginError::EmptyUsername);
        }
        if self.phase != Phase::LoggedOut {
            log::warn!("login ignored: session already active");
            return Ok(false);
        }
        self.spawn_obstacles();
        self.phase = Phase::Paused;
        log::info!("logged in as {}, seed {}", username.trim(), self.seed);
        Ok(true)
    }

    /// Begin or resume gameplay
    pub fn start(&mut self) {
        match self.phase {
            Phase::Paused => self.phase = Phase::Running,
            Phase::Running => {}
            Phase::LoggedOut => log::warn!("start ignored: not logged in"),
        }
    }

    /// Freeze gameplay; the frame loop keeps firing but skips updates
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Reset score/level/player/camera and resume. Obstacles keep their
    /// positions and velocities; they are never respawned mid-session.
    pub fn restart(&mut self) {
        if self.phase == Phase::LoggedOut {
            log::warn!("restart ignored: not logged in");
            return;
        }
        self.score = 0;
        self.level = 1;
        self.player.position = Vec3::ZERO;
        self.camera = Camera::default();
        self.in_contact = false;
        self.phase = Phase::Running;
    }

    /// Collision response: player back to the origin, score docked
    /// (clamped at zero). The camera catches up on the next tick.
    pub(crate) fn apply_collision(&mut self) {
        self.player.position = Vec3::ZERO;
        self.score = self.score.saturating_sub(COLLISION_PENALTY);
    }

    fn spawn_obstacles(&mut self) {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        self.obstacles = (0..OBSTACLE_COUNT)
            .map(|_| {
                let mut body = SpatialObject::cube(OBSTACLE_SIZE);
                body.position = Vec3::new(
                    rng.random_range(-BOUND_X..=BOUND_X),
                    rng.random_range(-BOUND_Y..=BOUND_Y),
                    0.0,
                );
                let velocity = Vec2::new(
                    (rng.random::<f32>() - 0.5) * OBSTACLE_SPEED,
                    (rng.random::<f32>() - 0.5) * OBSTACLE_SPEED,
                );
                Obstacle { body, velocity }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_with_empty_username_is_rejected() {
        let mut session = GameSession::new(1);
        assert_eq!(session.login("   "), Err(LoginError::EmptyUsername));
        assert_eq!(session.phase, Phase::LoggedOut);
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn login_builds_world_and_enters_paused() {
        let mut session = GameSession::new(42);
        session.login("tester").unwrap();

        assert_eq!(session.phase, Phase::Paused);
        assert_eq!(session.obstacles.len(), OBSTACLE_COUNT);
        for obstacle in &session.obstacles {
            assert!(obstacle.body.position.x.abs() <= BOUND_X);
            assert!(obstacle.body.position.y.abs() <= BOUND_Y);
            assert_eq!(obstacle.body.position.z, 0.0);
            assert!(obstacle.velocity.x.abs() <= OBSTACLE_SPEED / 2.0);
            assert!(obstacle.velocity.y.abs() <= OBSTACLE_SPEED / 2.0);
        }
    }

    #[test]
    fn spawn_is_deterministic_per_seed() {
        let mut a = GameSession::new(7);
        let mut b = GameSession::new(7);
        a.login("a").unwrap();
        b.login("b").unwrap();
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn repeat_login_is_a_noop() {
        let mut session = GameSession::new(5);
        assert_eq!(session.login("tester"), Ok(true));

        let obstacles = session.obstacles.clone();
        session.start();

        assert_eq!(session.login("tester"), Ok(false));
        assert_eq!(session.phase, Phase::Running);
        assert_eq!(session.obstacles, obstacles);
    }

    #[test]
    fn start_requires_login() {
        let mut session = GameSession::new(1);
        session.start();
        assert_eq!(session.phase, Phase::LoggedOut);
    }

    #[test]
    fn pause_and_start_toggle_running() {
        let mut session = GameSession::new(1);
        session.login("tester").unwrap();

        session.start();
        assert_eq!(session.phase, Phase::Running);
        session.pause();
        assert_eq!(session.phase, Phase::Paused);
        session.start();
        assert_eq!(session.phase, Phase::Running);
    }

    #[test]
    fn restart_resets_state_but_keeps_obstacles() {
        let mut session = GameSession::new(9);
        session.login("tester").unwrap();
        session.start();

        let obstacles = session.obstacles.clone();
        session.score = 40;
        session.level = 3;
        session.player.position = glam::Vec3::new(2.0, -1.0, 0.0);
        session.camera.position = glam::Vec3::new(2.0, -1.0, CAMERA_DISTANCE);
        session.pause();

        session.restart();

        assert_eq!(session.score, 0);
        assert_eq!(session.level, 1);
        assert_eq!(session.phase, Phase::Running);
        assert_eq!(session.player.position, glam::Vec3::ZERO);
        assert_eq!(session.camera, Camera::default());
        assert_eq!(session.obstacles, obstacles);
    }

    #[test]
    fn collision_penalty_clamps_at_zero() {
        let mut session = GameSession::new(1);
        session.score = 3;
        session.apply_collision();
        assert_eq!(session.score, 0);
        session.apply_collision();
        assert_eq!(session.score, 0);
    }
}
