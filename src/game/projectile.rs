//! Player projectiles

use glam::Vec3;

/// The four abilities the player can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    /// Plain damage
    Potato,
    /// No impact damage, sets the enemy burning
    Fireball,
    /// Heavy damage and slows the enemy down
    Iceball,
    /// Light damage and knocks the enemy back
    Magic,
}

impl ProjectileKind {
    /// All kinds, in ability order
    pub const ALL: [Self; 4] = [Self::Potato, Self::Fireball, Self::Iceball, Self::Magic];

    /// Health removed on impact
    #[must_use]
    pub fn damage(self) -> i32 {
        match self {
            Self::Potato => 5,
            Self::Fireball => 0,
            Self::Iceball => 40,
            Self::Magic => 4,
        }
    }

    /// Multiplier on the base projectile speed
    #[must_use]
    pub fn speed_factor(self) -> f32 {
        match self {
            Self::Potato | Self::Fireball => 1.0,
            Self::Iceball => 0.75,
            Self::Magic => 1.75,
        }
    }

    /// Full size of the projectile's box
    #[must_use]
    pub fn size(self) -> Vec3 {
        Vec3::splat(match self {
            Self::Potato => 0.5,
            Self::Fireball => 0.75,
            Self::Iceball => 1.5,
            Self::Magic => 0.2,
        })
    }

    /// The ability after this one, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Potato => Self::Fireball,
            Self::Fireball => Self::Iceball,
            Self::Iceball => Self::Magic,
            Self::Magic => Self::Potato,
        }
    }
}

/// Projectile component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// World units per second
    pub velocity: Vec3,
    /// Seconds since it was fired
    pub age: f32,
}

impl Projectile {
    /// Launch along `direction` at the kind's share of `base_speed`
    ///
    /// Returns `None` for a zero direction.
    #[must_use]
    pub fn launch(kind: ProjectileKind, direction: Vec3, base_speed: f32) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self {
            kind,
            velocity: direction * base_speed * kind.speed_factor(),
            age: 0.0,
        })
    }
}
