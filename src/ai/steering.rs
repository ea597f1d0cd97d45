//! Steering toward waypoints

use glam::Vec3;

/// Output from a steering behavior
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringOutput {
    /// Desired linear direction, scaled by the behavior's strength
    pub linear: Vec3,
}

impl SteeringOutput {
    /// Zero steering
    pub const ZERO: Self = Self { linear: Vec3::ZERO };
}

/// Trait for steering behaviors
pub trait SteeringBehavior {
    /// Calculate steering based on agent state
    fn calculate(&self, position: Vec3, velocity: Vec3) -> SteeringOutput;
}

/// Seek behavior - head straight for a target
#[derive(Debug, Clone)]
pub struct Seek {
    /// Target position
    pub target: Vec3,
    /// Length of the returned direction
    pub max_acceleration: f32,
}

impl Seek {
    /// Create a new seek behavior
    #[must_use]
    pub fn new(target: Vec3, max_acceleration: f32) -> Self {
        Self {
            target,
            max_acceleration,
        }
    }
}

impl SteeringBehavior for Seek {
    fn calculate(&self, position: Vec3, _velocity: Vec3) -> SteeringOutput {
        let direction = (self.target - position).normalize_or_zero();
        SteeringOutput {
            linear: direction * self.max_acceleration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek() {
        let seek = Seek::new(Vec3::new(10.0, 0.0, 0.0), 5.0);
        let output = seek.calculate(Vec3::ZERO, Vec3::ZERO);

        assert!(output.linear.x > 0.0);
        assert!((output.linear.length() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_seek_at_target() {
        let seek = Seek::new(Vec3::new(2.0, 1.0, 4.0), 1.0);

        assert_eq!(seek.calculate(Vec3::new(2.0, 1.0, 4.0), Vec3::ZERO), SteeringOutput::ZERO);
    }
}
