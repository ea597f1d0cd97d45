//! Arena configuration
//!
//! Loaded from and saved to RON (Rusty Object Notation), with JSON as an
//! alternate format. Missing fields fall back to the defaults below.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::GridConfig;

/// Errors that can occur while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Rectangle on the X/Z plane that agents are kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl PlayArea {
    /// Whether a position lies inside the area (edges included)
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        (self.x_min..=self.x_max).contains(&position.x)
            && (self.z_min..=self.z_max).contains(&position.z)
    }

    /// Clamp a position into the area, leaving Y untouched
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.x_min, self.x_max),
            position.y,
            position.z.clamp(self.z_min, self.z_max),
        )
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            x_min: -87.0,
            x_max: 91.8,
            z_min: -88.5,
            z_max: 90.5,
        }
    }
}

/// Tunables for the arena simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Navigation grid layout
    pub grid: GridConfig,
    /// Bounds agents must stay inside
    pub play_area: PlayArea,
    /// Seconds between path refreshes for each enemy
    pub path_refresh_interval: f32,
    /// Enemy speed in world units per second
    pub enemy_speed: f32,
    /// Enemy speed while chilled by an iceball
    pub chilled_speed: f32,
    /// Full size of an enemy's box
    pub enemy_size: Vec3,
    /// Enemy starting health
    pub enemy_health: i32,
    /// Enemies spawn uniformly within this distance of the origin on X and Z
    pub spawn_extent: f32,
    /// Full size of the player's box
    pub player_size: Vec3,
    /// Player starting health
    pub player_health: i32,
    /// Health the player loses when an enemy reaches them
    pub contact_damage: i32,
    /// Base projectile speed, scaled per projectile kind
    pub projectile_speed: f32,
    /// Seconds before an unspent projectile is removed
    pub projectile_lifetime: f32,
    /// Seed for spawn positions
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            play_area: PlayArea::default(),
            path_refresh_interval: 2.5,
            enemy_speed: 5.0,
            chilled_speed: 1.0,
            enemy_size: Vec3::splat(2.0),
            enemy_health: 100,
            spawn_extent: 80.0,
            player_size: Vec3::new(1.0, 2.0, 1.0),
            player_health: 100,
            contact_damage: 10,
            projectile_speed: 40.0,
            projectile_lifetime: 3.0,
            seed: 42,
        }
    }
}

impl ArenaConfig {
    /// Set the navigation grid layout
    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the play area
    #[must_use]
    pub fn with_play_area(mut self, play_area: PlayArea) -> Self {
        self.play_area = play_area;
        self
    }

    /// Set the path refresh interval in seconds
    #[must_use]
    pub fn with_path_refresh_interval(mut self, seconds: f32) -> Self {
        self.path_refresh_interval = seconds;
        self
    }

    /// Set the spawn extent
    #[must_use]
    pub fn with_spawn_extent(mut self, extent: f32) -> Self {
        self.spawn_extent = extent;
        self
    }

    /// Set the spawn seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Save the configuration to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, ron_string)?;
        Ok(())
    }

    /// Load the configuration from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Save the configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load the configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}
