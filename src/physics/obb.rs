//! Separating-axis oriented bounding boxes
//!
//! An [`Obb`] stores the local-space extents of a vertex cloud. It only
//! becomes oriented when paired with a model matrix and the rotated local
//! axes of its owner, which is what [`Obb::collides`] takes.

use glam::{Mat4, Vec3};
use thiserror::Error;

/// Errors raised while building a bounding box
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// A box needs at least three vertices
    #[error("bounding box needs at least 3 vertices, got {found}")]
    TooFewVertices { found: usize },
}

/// Local-space bounding box of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    min: Vec3,
    max: Vec3,
}

impl Obb {
    /// Minimum number of vertices accepted by [`Obb::from_vertices`]
    pub const MIN_VERTICES: usize = 3;

    /// Compute the box enclosing a local-space vertex cloud
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::TooFewVertices`] for fewer than 3 vertices
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, CollisionError> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(CollisionError::TooFewVertices {
                found: vertices.len(),
            });
        }

        let (min, max) = vertices.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), &v| (min.min(v), max.max(v)),
        );

        Ok(Self { min, max })
    }

    /// Box with explicit corners, ordered component-wise
    #[must_use]
    pub fn from_extents(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Local minimum corner
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Local maximum corner
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Half the size along each local axis
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Radius of the sphere used for the broad phase
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.min.distance(self.max) / 2.0
    }

    /// World position of the local origin
    #[must_use]
    pub fn center(matrix: &Mat4) -> Vec3 {
        matrix.transform_point3(Vec3::ZERO)
    }

    /// Local direction rotated into world space and normalised
    #[must_use]
    pub fn world_axis(matrix: &Mat4, axis: Vec3) -> Vec3 {
        matrix.transform_vector3(axis).normalize_or_zero()
    }

    /// Bounding-sphere test between two box centres
    #[must_use]
    pub fn sphere_collides(&self, this_pos: Vec3, other_pos: Vec3, other: &Obb) -> bool {
        this_pos.distance(other_pos) <= self.radius() + other.radius()
    }

    /// Test this box against another, both placed by their world transforms
    ///
    /// Runs the bounding-sphere test first and only falls through to the
    /// 15-axis separating axis test when the spheres overlap. Cross-product
    /// axes of nearly parallel edges are used as computed, even when they
    /// collapse to zero.
    #[must_use]
    pub fn collides(
        &self,
        this_matrix: &Mat4,
        this_axes: &[Vec3; 3],
        other: &Obb,
        other_matrix: &Mat4,
        other_axes: &[Vec3; 3],
    ) -> bool {
        let pa = Self::center(this_matrix);
        let pb = Self::center(other_matrix);

        if !self.sphere_collides(pa, pb, other) {
            return false;
        }

        let extent_a = world_half_extents(self, this_matrix);
        let extent_b = world_half_extents(other, other_matrix);

        let [ax, ay, az] = *this_axes;
        let [bx, by, bz] = *other_axes;

        let t = pb - pa;

        let axes = [
            ax,
            ay,
            az,
            bx,
            by,
            bz,
            ax.cross(bx),
            ax.cross(by),
            ax.cross(bz),
            ay.cross(bx),
            ay.cross(by),
            ay.cross(bz),
            az.cross(bx),
            az.cross(by),
            az.cross(bz),
        ];

        let projected = [
            ax * extent_a.x,
            ay * extent_a.y,
            az * extent_a.z,
            bx * extent_b.x,
            by * extent_b.y,
            bz * extent_b.z,
        ];

        for l in axes {
            let distance = t.dot(l).abs();
            let reach: f32 = projected.iter().map(|p| p.dot(l).abs()).sum();

            if distance > reach {
                return false;
            }
        }

        true
    }
}

/// Half the world-space span between the transformed min and max corners
fn world_half_extents(obb: &Obb, matrix: &Mat4) -> Vec3 {
    let min = matrix.transform_point3(obb.min);
    let max = matrix.transform_point3(obb.max);
    (max - min) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    const AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

    fn unit_cube() -> Obb {
        let mut vertices = Vec::new();
        for x in [-0.5, 0.5] {
            for y in [-0.5, 0.5] {
                for z in [-0.5, 0.5] {
                    vertices.push(Vec3::new(x, y, z));
                }
            }
        }
        Obb::from_vertices(&vertices).unwrap()
    }

    fn at(position: Vec3) -> Mat4 {
        Mat4::from_translation(position)
    }

    #[test]
    fn test_extents_from_vertices() {
        let obb = Obb::from_vertices(&[
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
        ])
        .unwrap();

        assert_eq!(obb.min(), Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(obb.max(), Vec3::new(1.0, 3.0, 0.5));
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Obb::from_vertices(&[Vec3::ZERO, Vec3::ONE]);
        assert_eq!(result, Err(CollisionError::TooFewVertices { found: 2 }));
    }

    #[test]
    fn test_radius_is_half_diagonal() {
        let obb = unit_cube();
        assert!((obb.radius() - 3.0_f32.sqrt() / 2.0).abs() < 0.0001);
        assert_eq!(obb.half_extents(), Vec3::splat(0.5));
    }

    #[test]
    fn test_far_apart_rejected_by_spheres() {
        let a = unit_cube();
        let b = unit_cube();
        let pa = Vec3::ZERO;
        let pb = Vec3::new(5.0, 0.0, 0.0);

        assert!(!a.sphere_collides(pa, pb, &b));
        assert!(!a.collides(&at(pa), &AXES, &b, &at(pb), &AXES));
    }

    #[test]
    fn test_axis_aligned_overlap() {
        let a = unit_cube();
        let b = unit_cube();

        assert!(a.collides(
            &at(Vec3::ZERO),
            &AXES,
            &b,
            &at(Vec3::new(0.8, 0.3, -0.4)),
            &AXES
        ));
    }

    #[test]
    fn test_identical_placement_collides() {
        let a = unit_cube();
        assert!(a.collides(&Mat4::IDENTITY, &AXES, &a, &Mat4::IDENTITY, &AXES));
    }

    #[test]
    fn test_gap_inside_sphere_range_is_separated() {
        let a = unit_cube();
        let b = unit_cube();
        let pb = Vec3::new(1.5, 0.0, 0.0);

        // Spheres (r = 0.87) overlap, so only the separating axis test can reject
        assert!(a.sphere_collides(Vec3::ZERO, pb, &b));
        assert!(!a.collides(&at(Vec3::ZERO), &AXES, &b, &at(pb), &AXES));
    }

    #[test]
    fn test_diagonal_gap_is_separated() {
        let a = unit_cube();
        let b = unit_cube();
        let pb = Vec3::new(1.05, 1.05, 0.0);

        assert!(a.sphere_collides(Vec3::ZERO, pb, &b));
        assert!(!a.collides(&at(Vec3::ZERO), &AXES, &b, &at(pb), &AXES));
    }

    #[test]
    fn test_rotated_overlap() {
        let a = unit_cube();
        let b = unit_cube();
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let matrix_b = Mat4::from_rotation_translation(rotation, Vec3::new(0.5, 0.0, 0.0));
        let axes_b = [rotation * Vec3::X, rotation * Vec3::Y, rotation * Vec3::Z];

        assert!(a.collides(&at(Vec3::ZERO), &AXES, &b, &matrix_b, &axes_b));
        assert!(b.collides(&matrix_b, &axes_b, &a, &at(Vec3::ZERO), &AXES));
    }

    #[test]
    fn test_world_axis_and_center() {
        let rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let matrix = Mat4::from_scale_rotation_translation(
            Vec3::splat(3.0),
            rotation,
            Vec3::new(1.0, 2.0, 3.0),
        );

        assert!((Obb::center(&matrix) - Vec3::new(1.0, 2.0, 3.0)).length() < 0.0001);
        assert!((Obb::world_axis(&matrix, Vec3::X) - Vec3::Y).length() < 0.0001);
    }
}
