//! Axis-aligned bounding-box collision detection
//!
//! Player and obstacles are boxes; overlap is inclusive of touching faces.
//! The scan reports the first overlapping obstacle in iteration order, so at
//! most one collision is handled per tick.

use glam::Vec3;

use super::state::{Obstacle, SpatialObject};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_object(object: &SpatialObject) -> Self {
        Self {
            min: object.position - object.half_extents,
            max: object.position + object.half_extents,
        }
    }

    /// Overlap test, inclusive: boxes sharing a face, edge, or corner collide
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Index of the first obstacle whose box overlaps the player's, if any
pub fn first_hit(player: &SpatialObject, obstacles: &[Obstacle]) -> Option<usize> {
    let player_box = Aabb::from_object(player);
    obstacles
        .iter()
        .position(|obstacle| player_box.intersects(&Aabb::from_object(&obstacle.body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn boxed(x: f32, y: f32, z: f32, half: f32) -> SpatialObject {
        SpatialObject {
            position: Vec3::new(x, y, z),
            half_extents: Vec3::splat(half),
        }
    }

    fn obstacle(x: f32, y: f32, z: f32, half: f32) -> Obstacle {
        Obstacle {
            body: boxed(x, y, z, half),
            velocity: Vec2::ZERO,
        }
    }

    #[test]
    fn identical_boxes_collide() {
        let a = boxed(1.0, 2.0, 0.0, 0.25);
        assert!(Aabb::from_object(&a).intersects(&Aabb::from_object(&a)));
    }

    #[test]
    fn touching_faces_collide() {
        // Faces meet exactly at x = 0.5
        let a = boxed(0.0, 0.0, 0.0, 0.5);
        let b = boxed(1.0, 0.0, 0.0, 0.5);
        assert!(Aabb::from_object(&a).intersects(&Aabb::from_object(&b)));
    }

    #[test]
    fn separated_boxes_miss() {
        let a = boxed(0.0, 0.0, 0.0, 0.25);
        let b = boxed(1.0, 0.0, 0.0, 0.25);
        assert!(!Aabb::from_object(&a).intersects(&Aabb::from_object(&b)));
    }

    #[test]
    fn z_separation_misses_despite_xy_overlap() {
        let player = boxed(0.0, 0.0, 0.0, 0.25);
        let far = obstacle(0.0, 0.0, 5.0, 0.4);
        assert_eq!(first_hit(&player, &[far]), None);
    }

    #[test]
    fn first_hit_reports_iteration_order() {
        let player = boxed(0.0, 0.0, 0.0, 0.25);
        let obstacles = [
            obstacle(10.0, 0.0, 0.0, 0.4),
            obstacle(0.1, 0.0, 0.0, 0.4),
            obstacle(-0.1, 0.0, 0.0, 0.4),
        ];
        assert_eq!(first_hit(&player, &obstacles), Some(1));
    }

    #[test]
    fn no_obstacles_no_hit() {
        let player = boxed(0.0, 0.0, 0.0, 0.25);
        assert_eq!(first_hit(&player, &[]), None);
    }
}
