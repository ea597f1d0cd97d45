//! Path following for grid agents
//!
//! Agents keep the last path they were given and steer toward the node
//! after the one they are currently standing on. A [`PathTimer`] decides
//! when the owner should ask the [`Map`] for a fresh route.

use glam::Vec3;

use super::node::GridIndex;
use super::pathfinding::{Map, PathResult};
use super::steering::{Seek, SteeringBehavior};

/// Interval timer gating path refreshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathTimer {
    elapsed: f32,
    interval: f32,
}

impl PathTimer {
    /// Create a timer that becomes due every `interval` seconds
    #[must_use]
    pub fn new(interval: f32) -> Self {
        Self {
            elapsed: 0.0,
            interval,
        }
    }

    /// Whether a refresh should happen this frame
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.elapsed >= self.interval
    }

    /// Advance by a frame delta, restarting first if the timer was due
    pub fn tick(&mut self, delta: f32) {
        if self.is_due() {
            self.elapsed = 0.0;
        }
        self.elapsed += delta;
    }

    /// Seconds since the last restart
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Refresh interval in seconds
    #[must_use]
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

/// Follows the most recent path handed to an agent
#[derive(Debug, Clone, Default)]
pub struct PathFollower {
    path: PathResult,
}

impl PathFollower {
    /// Create a follower with no path
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current path
    pub fn set_path(&mut self, path: PathResult) {
        self.path = path;
    }

    /// The path currently being followed
    #[must_use]
    pub fn path(&self) -> &PathResult {
        &self.path
    }

    /// Pick the node to head for from `position`
    ///
    /// Returns the path node after the agent's closest grid node, the last
    /// node if the agent already stands on it, or the closest node itself
    /// when the agent has strayed off the path.
    #[must_use]
    pub fn next_waypoint(&self, map: &Map, position: Vec3) -> Option<GridIndex> {
        let closest = map.closest_node(position)?;

        match self.path.nodes.iter().position(|&index| index == closest) {
            Some(i) => self.path.nodes.get(i + 1).copied().or(Some(closest)),
            None => Some(closest),
        }
    }

    /// Unit direction toward the next waypoint, on the agent's own height
    ///
    /// Paths with fewer than two nodes give no direction, so an agent with
    /// no route holds its position.
    #[must_use]
    pub fn steering(&self, map: &Map, position: Vec3) -> Vec3 {
        if self.path.len() <= 1 {
            return Vec3::ZERO;
        }

        let Some(node) = self
            .next_waypoint(map, position)
            .and_then(|index| map.node(index).ok())
        else {
            return Vec3::ZERO;
        };

        let target = Vec3::new(node.x() as f32, position.y, node.y() as f32);
        Seek::new(target, 1.0)
            .calculate(position, Vec3::ZERO)
            .linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_path(map: &mut Map) -> PathFollower {
        let mut follower = PathFollower::new();
        let path = map
            .find_path(GridIndex::new(0, 0), GridIndex::new(4, 0))
            .unwrap();
        follower.set_path(path);
        follower
    }

    #[test]
    fn test_timer_refresh_cycle() {
        let mut timer = PathTimer::new(2.5);
        assert!(!timer.is_due());

        for _ in 0..5 {
            timer.tick(0.5);
        }
        assert!(timer.is_due());

        // Restarts before adding the new delta
        timer.tick(0.25);
        assert!(!timer.is_due());
        assert!((timer.elapsed() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_next_waypoint_on_path() {
        let mut map = Map::new(5, 5, 2).unwrap();
        let follower = straight_path(&mut map);

        // Closest to (1, 0) -> head for (2, 0)
        let next = follower.next_waypoint(&map, Vec3::new(2.2, 0.0, 0.3));
        assert_eq!(next, Some(GridIndex::new(2, 0)));
    }

    #[test]
    fn test_next_waypoint_at_end() {
        let mut map = Map::new(5, 5, 2).unwrap();
        let follower = straight_path(&mut map);

        let next = follower.next_waypoint(&map, Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(next, Some(GridIndex::new(4, 0)));
    }

    #[test]
    fn test_next_waypoint_off_path() {
        let mut map = Map::new(5, 5, 2).unwrap();
        let follower = straight_path(&mut map);

        let next = follower.next_waypoint(&map, Vec3::new(6.0, 0.0, 6.0));
        assert_eq!(next, Some(GridIndex::new(3, 3)));
    }

    #[test]
    fn test_steering_points_along_path() {
        let mut map = Map::new(5, 5, 2).unwrap();
        let follower = straight_path(&mut map);

        let direction = follower.steering(&map, Vec3::new(0.0, 1.0, 0.0));
        assert!((direction - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_steering_without_route() {
        let map = Map::new(5, 5, 2).unwrap();
        let follower = PathFollower::new();

        assert_eq!(follower.steering(&map, Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_steering_single_node_path() {
        let mut map = Map::new(5, 5, 2).unwrap();
        let mut follower = PathFollower::new();
        let node = GridIndex::new(1, 1);
        follower.set_path(map.find_path(node, node).unwrap());

        assert_eq!(follower.steering(&map, Vec3::new(2.0, 0.0, 2.0)), Vec3::ZERO);
    }
}
