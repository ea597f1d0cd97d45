//! Per-query collision bundles
//!
//! Shapes move every frame, so a [`Collidable`] is assembled from the
//! shape's current state right before each test and dropped afterwards.
//! Nothing here caches world-space data.

use glam::{Mat4, Vec3};

use super::obb::{CollisionError, Obb};
use crate::ecs::Transform;

/// Anything that can be placed in a collision test
pub trait Bounded {
    /// Local-space bounding box
    fn bounding_box(&self) -> &Obb;

    /// Current model matrix
    fn model_matrix(&self) -> Mat4;

    /// Current local X, Y and Z axes in world space
    fn local_axes(&self) -> [Vec3; 3];
}

/// A bounding box together with the world transform it is tested under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collidable {
    pub bounding_box: Obb,
    pub model_matrix: Mat4,
    pub local_axes: [Vec3; 3],
}

impl Collidable {
    /// Snapshot a shape's current box and transform
    #[must_use]
    pub fn assemble<B: Bounded + ?Sized>(shape: &B) -> Self {
        Self {
            bounding_box: *shape.bounding_box(),
            model_matrix: shape.model_matrix(),
            local_axes: shape.local_axes(),
        }
    }

    /// Build the box from raw local vertices and place it with `transform`
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::TooFewVertices`] for fewer than 3 vertices
    pub fn from_vertices(vertices: &[Vec3], transform: &Transform) -> Result<Self, CollisionError> {
        Ok(Self {
            bounding_box: Obb::from_vertices(vertices)?,
            model_matrix: transform.matrix(),
            local_axes: transform.local_axes(),
        })
    }

    /// World position of the box origin
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Obb::center(&self.model_matrix)
    }

    /// Test against another collidable
    #[must_use]
    pub fn collides(&self, other: &Collidable) -> bool {
        self.bounding_box.collides(
            &self.model_matrix,
            &self.local_axes,
            &other.bounding_box,
            &other.model_matrix,
            &other.local_axes,
        )
    }
}

/// Test two collidables against each other
#[must_use]
pub fn collides(a: &Collidable, b: &Collidable) -> bool {
    a.collides(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Body;
    use glam::Quat;

    #[test]
    fn test_assemble_reads_current_transform() {
        let mut body = Body::cuboid(Transform::new(), Vec3::ONE);
        let before = Collidable::assemble(&body);

        body.transform.translate(Vec3::new(3.0, 0.0, 0.0));
        body.transform.rotation = Quat::from_rotation_y(0.3);
        let after = Collidable::assemble(&body);

        assert_eq!(before.center(), Vec3::ZERO);
        assert!((after.center() - Vec3::new(3.0, 0.0, 0.0)).length() < 0.0001);
        assert_eq!(after.local_axes, body.transform.local_axes());
        assert_eq!(after.bounding_box, body.bounds);
    }

    #[test]
    fn test_moving_body_stops_colliding() {
        let player = Body::cuboid(Transform::new(), Vec3::ONE);
        let mut enemy = Body::cuboid(Transform::from_position(Vec3::new(0.6, 0.0, 0.0)), Vec3::ONE);

        assert!(collides(
            &Collidable::assemble(&player),
            &Collidable::assemble(&enemy)
        ));

        enemy.transform.translate(Vec3::new(1.0, 0.0, 0.0));
        assert!(!collides(
            &Collidable::assemble(&player),
            &Collidable::assemble(&enemy)
        ));
    }

    #[test]
    fn test_from_vertices() {
        let transform = Transform::from_position(Vec3::new(0.0, 0.0, 10.0));
        let triangle = [Vec3::ZERO, Vec3::X, Vec3::Y];

        let collidable = Collidable::from_vertices(&triangle, &transform).unwrap();
        assert_eq!(collidable.center(), Vec3::new(0.0, 0.0, 10.0));

        let result = Collidable::from_vertices(&triangle[..2], &transform);
        assert_eq!(result, Err(CollisionError::TooFewVertices { found: 2 }));
    }
}
