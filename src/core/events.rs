//! Event Queue for arena outcomes
//!
//! Collision verdicts and path refreshes are turned into events so scoring,
//! logging and any presentation layer can react without reaching into the
//! simulation. The queue is double-buffered: events written during one
//! frame are read during the next.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::Entity;

use crate::game::ProjectileKind;

// ============================================================================
// Event Types
// ============================================================================

/// Something that happened in the arena this frame
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum GameEvent {
    /// A projectile struck an enemy
    EnemyHit {
        /// The enemy that was hit
        enemy: Entity,
        /// Kind of projectile that landed
        kind: ProjectileKind,
        /// Health left after the hit
        remaining_health: i32,
    },

    /// An enemy finished exploding and was removed
    EnemyDestroyed {
        /// The removed enemy
        enemy: Entity,
    },

    /// An enemy reached the player
    PlayerHit {
        /// The enemy that was consumed by the contact
        enemy: Entity,
        /// Player health after the hit
        remaining_health: i32,
    },

    /// A new wave of enemies entered the arena
    WaveSpawned {
        /// Wave number, starting at 1
        wave: u32,
        /// Enemies in this wave
        count: u32,
    },

    /// An enemy was given a fresh route toward the player
    PathRefreshed {
        /// The enemy that asked for a route
        enemy: Entity,
        /// Number of nodes in the route, 0 when unreachable
        nodes: usize,
        /// Where the enemy stood when the route was computed
        from: Vec3,
    },

    /// Player score changed
    ScoreChanged {
        /// New score value
        score: u32,
    },
}

// ============================================================================
// Event Queue
// ============================================================================

/// Double-buffered event queue for frame-consistent event processing.
///
/// Events pushed during frame N are available for reading during frame N+1.
#[derive(Debug)]
pub struct EventQueue {
    /// Events being written this frame
    pending: VecDeque<GameEvent>,
    /// Events from previous frame, ready for processing
    processing: VecDeque<GameEvent>,
}

impl EventQueue {
    /// Default initial capacity for event queues.
    const DEFAULT_CAPACITY: usize = 64;

    /// Create a new event queue with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a new event queue with specified initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity),
            processing: VecDeque::with_capacity(capacity),
        }
    }

    /// Push an event to be processed next frame.
    #[inline]
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Swap the pending and processing queues.
    ///
    /// Call this once per frame, at the start of the update.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.processing);
        self.pending.clear();
    }

    /// Iterate over events from the previous frame.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.processing.iter()
    }

    /// Drain all events from the previous frame.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.processing.drain(..)
    }

    /// Check if there are any events to process.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processing.is_empty()
    }

    /// Get the number of events ready for processing.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.processing.len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
