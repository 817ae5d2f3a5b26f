//! Deterministic gameplay module
//!
//! All game logic lives here. This module must stay pure and deterministic:
//! - One logical tick per display frame, constants in units per tick
//! - Seeded RNG only (obstacle spawn is the only randomness)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit};
pub use input::{Direction, InputState};
pub use state::{Camera, GameSession, LoginError, Obstacle, Phase, SpatialObject};
pub use tick::tick;
