//! Collision detection module
//!
//! Oriented bounding boxes tested with the separating axis theorem

mod collidable;
mod obb;

pub use collidable::{Bounded, Collidable, collides};
pub use obb::{CollisionError, Obb};
