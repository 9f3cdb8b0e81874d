//! Core simulation for the power-up snake game
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! Frontends own a [`GameState`], feed intents to a [`GameEngine`] and draw
//! the [`GameSnapshot`] it hands back.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod power_up;
pub mod scheduler;
pub mod snapshot;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use collision::DamageCause;
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use grid::GRID_SIZE;
pub use scheduler::DeferredEvent;
pub use snapshot::{GameSnapshot, PowerUpCell};
pub use spawner::Spawner;
pub use state::{Enemy, EntityId, Food, GameState, Position, PowerUp, PowerUpKind, Snake};
