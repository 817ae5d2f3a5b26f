//! Cube Dodge - a 3D cube-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic gameplay engine (input, motion, collisions, session)
//! - `scheduler`: Frame loop handle driven by the display's refresh callback
//! - `progress`: Score/level snapshot persisted across sessions
//! - `hud`: DOM score/level display and modal visibility

pub mod hud;
pub mod progress;
pub mod scheduler;
pub mod sim;

pub use progress::SavedProgress;
pub use scheduler::FrameLoop;
pub use sim::{GameSession, InputState, Phase};

/// Game configuration constants
pub mod consts {
    /// Player movement per tick (units per frame, no delta-time scaling)
    pub const PLAYER_SPEED: f32 = 0.1;
    /// Obstacle speed range: per-axis velocity in [-OBSTACLE_SPEED/2, OBSTACLE_SPEED/2]
    pub const OBSTACLE_SPEED: f32 = 0.02;
    /// Number of obstacles, fixed for the session
    pub const OBSTACLE_COUNT: usize = 5;

    /// Play area half-width (x axis)
    pub const BOUND_X: f32 = 4.0;
    /// Play area half-height (y axis)
    pub const BOUND_Y: f32 = 3.0;

    /// Camera z distance (hard follow keeps x/y locked to the player)
    pub const CAMERA_DISTANCE: f32 = 5.0;

    /// Player cube edge length
    pub const PLAYER_SIZE: f32 = 0.5;
    /// Obstacle cube edge length
    pub const OBSTACLE_SIZE: f32 = 0.8;

    /// Points lost per collision (score clamps at zero)
    pub const COLLISION_PENALTY: u32 = 5;
}
