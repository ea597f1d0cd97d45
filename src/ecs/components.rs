//! Common ECS components

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::{Bounded, CollisionError, Obb};

/// Transform component for position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Scale factor
    pub scale: Vec3,
    /// Local point the rotation pivots around
    pub rotation_point: Vec3,
}

impl Transform {
    /// Create a new transform at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Get the transformation matrix
    ///
    /// Scales first, then rotates around `rotation_point`, then translates.
    pub fn matrix(&self) -> Mat4 {
        let pivot = Mat4::from_translation(self.rotation_point)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_translation(-self.rotation_point);

        Mat4::from_translation(self.position) * pivot * Mat4::from_scale(self.scale)
    }

    /// The local X, Y and Z axes rotated into world space
    pub fn local_axes(&self) -> [Vec3; 3] {
        [
            self.rotation * Vec3::X,
            self.rotation * Vec3::Y,
            self.rotation * Vec3::Z,
        ]
    }

    /// Translate by a delta
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate by euler angles (in radians)
    pub fn rotate_euler(&mut self, euler: Vec3) {
        self.rotation =
            Quat::from_euler(glam::EulerRot::XYZ, euler.x, euler.y, euler.z) * self.rotation;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            rotation_point: Vec3::ZERO,
        }
    }
}

/// A movable proxy shape: where it is and the box that encloses it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub transform: Transform,
    pub bounds: Obb,
}

impl Body {
    /// Wrap an existing bounding box
    pub fn new(transform: Transform, bounds: Obb) -> Self {
        Self { transform, bounds }
    }

    /// Build the bounding box from the shape's local vertices
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are supplied
    pub fn from_vertices(transform: Transform, vertices: &[Vec3]) -> Result<Self, CollisionError> {
        Ok(Self::new(transform, Obb::from_vertices(vertices)?))
    }

    /// An axis-aligned box of the given full size, centred on its origin
    pub fn cuboid(transform: Transform, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(transform, Obb::from_extents(-half, half))
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

impl Bounded for Body {
    fn bounding_box(&self) -> &Obb {
        &self.bounds
    }

    fn model_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    fn local_axes(&self) -> [Vec3; 3] {
        self.transform.local_axes()
    }
}
