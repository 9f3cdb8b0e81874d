//! Power Snake - a snake arcade game with enemies, lives and power-ups
//!
//! This library provides:
//! - Core simulation (game module): ticks, collisions, power-up effects, deferred events
//! - Terminal input mapping (input module)
//! - TUI rendering of game snapshots (render module)
//! - Session statistics (metrics module)
//! - Interactive and headless runners (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
