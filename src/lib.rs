//! Grid navigation and box collision for a top-down arena
//!
//! This crate provides:
//! - A* pathfinding over a blocked/unblocked node grid
//! - Oriented bounding box collision with the separating axis theorem
//! - Entity Component System (ECS) storage for arena bodies
//! - A headless fixed-step frame loop and the arena gameplay driving it

pub mod ai;
pub mod core;
pub mod ecs;
pub mod game;
pub mod physics;

// Re-exports for convenience
pub use glam;
pub use hecs;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::ai::{GridConfig, GridIndex, Map, Node, PathFollower, PathResult, PathTimer};
    pub use crate::core::{ArenaConfig, Engine, EngineConfig, EngineContext, Game, GameEvent};
    pub use crate::ecs::{Body, Transform, World};
    pub use crate::game::{Arena, ArenaError, ProjectileKind};
    pub use crate::physics::{Bounded, Collidable, Obb};
    pub use glam::{Mat4, Quat, Vec2, Vec3};
}
