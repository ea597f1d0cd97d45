//! AI and navigation module
//!
//! Provides grid pathfinding, path following, and steering behaviors.

mod follow;
mod node;
mod pathfinding;
mod steering;

pub use follow::{PathFollower, PathTimer};
pub use node::{BLOCKED_COST, GridIndex, Node, UNVISITED_COST};
pub use pathfinding::{GridConfig, Map, MovementCost, NavError, PathResult, UniformCost};
pub use steering::{Seek, SteeringBehavior, SteeringOutput};
