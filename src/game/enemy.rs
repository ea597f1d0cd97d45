//! Enemy agents
//!
//! An enemy walks the last route it was given, takes damage from
//! projectiles and explodes once its health runs out.

use glam::Vec3;

use super::projectile::ProjectileKind;
use crate::ai::{Map, PathFollower, PathTimer};
use crate::ecs::Transform;

/// Seconds a fireball keeps an enemy burning
pub const BURN_DURATION: f32 = 1.5;
/// Seconds an iceball keeps an enemy slowed
pub const CHILL_DURATION: f32 = 5.0;
/// Seconds between the killing blow and removal
pub const EXPLOSION_DURATION: f32 = 2.0;

/// Enemy component
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Route toward the player
    pub follower: PathFollower,
    /// When to ask for a new route
    pub timer: PathTimer,
    health: i32,
    burn_timer: f32,
    chill_timer: f32,
    /// Seconds spent exploding, once dead
    exploding: Option<f32>,
    done: bool,
    heading: Vec3,
}

impl Enemy {
    /// Create an enemy refreshing its route every `refresh_interval` seconds
    #[must_use]
    pub fn new(health: i32, refresh_interval: f32) -> Self {
        Self {
            follower: PathFollower::new(),
            timer: PathTimer::new(refresh_interval),
            health,
            burn_timer: BURN_DURATION,
            chill_timer: CHILL_DURATION,
            exploding: None,
            done: false,
            heading: Vec3::ZERO,
        }
    }

    /// Remaining health
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Whether the enemy has been killed and is playing its explosion
    #[must_use]
    pub fn is_exploding(&self) -> bool {
        self.exploding.is_some()
    }

    /// Whether the explosion has finished and the enemy can be removed
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the enemy still takes part in collisions
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.done && self.exploding.is_none()
    }

    /// Whether a fireball is still burning the enemy
    #[must_use]
    pub fn is_burning(&self) -> bool {
        self.burn_timer < BURN_DURATION
    }

    /// Whether an iceball is still slowing the enemy
    #[must_use]
    pub fn is_chilled(&self) -> bool {
        self.chill_timer < CHILL_DURATION
    }

    /// Current unit movement direction
    #[must_use]
    pub fn heading(&self) -> Vec3 {
        self.heading
    }

    /// Start the explosion if it has not started yet
    pub fn explode(&mut self) {
        self.exploding.get_or_insert(0.0);
    }

    /// Apply a projectile hit and return the remaining health
    ///
    /// Fire and ice cancel each other out.
    pub fn hit(&mut self, kind: ProjectileKind) -> i32 {
        self.health -= kind.damage();

        match kind {
            ProjectileKind::Fireball => {
                self.burn_timer = 0.0;
                self.chill_timer = CHILL_DURATION;
            }
            ProjectileKind::Iceball => {
                self.chill_timer = 0.0;
                self.burn_timer = BURN_DURATION;
            }
            ProjectileKind::Potato | ProjectileKind::Magic => {}
        }

        self.health
    }

    /// Point the enemy at the next waypoint of its route
    pub fn steer(&mut self, map: &Map, position: Vec3) {
        self.heading = self.follower.steering(map, position);
    }

    /// Advance timers, apply burn damage and move along the heading
    ///
    /// Burning costs one health point per frame.
    pub fn update(&mut self, delta: f32, transform: &mut Transform, speed: f32, chilled_speed: f32) {
        if let Some(time) = self.exploding.as_mut() {
            *time += delta;
            if *time >= EXPLOSION_DURATION {
                self.done = true;
            }
        }

        self.timer.tick(delta);
        self.chill_timer += delta;
        self.burn_timer += delta;

        if self.is_burning() {
            self.health -= 1;
        }

        let speed = if self.is_chilled() { chilled_speed } else { speed };
        if self.exploding.is_none() {
            transform.translate(self.heading * delta * speed);
        }

        if self.health <= 0 {
            self.explode();
        }
    }
}
