//! Arena gameplay
//!
//! Enemies route to the player over the navigation grid and are stopped by
//! projectiles; every contact is decided by the OBB collision test.

mod arena;
mod enemy;
mod player;
mod projectile;

pub use arena::{Arena, ArenaError};
pub use enemy::{BURN_DURATION, CHILL_DURATION, EXPLOSION_DURATION, Enemy};
pub use player::Player;
pub use projectile::{Projectile, ProjectileKind};
