//! Core engine module
//!
//! Contains the frame loop, configuration and event queue

mod config;
mod engine;
mod events;
mod time;

pub use config::{ArenaConfig, ConfigError, PlayArea};
pub use engine::{Engine, EngineConfig, EngineContext, Game};
pub use events::{EventQueue, GameEvent};
pub use time::Time;
