use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::action::Direction;
use super::grid::GRID_SIZE;
use super::state::Position;

/// Rule values for a game session. All durations are in milliseconds of game time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tick spacing in normal movement
    pub tick_interval_ms: u64,
    /// Tick spacing while dashing
    pub dash_tick_interval_ms: u64,
    pub dash_duration_ms: u64,
    pub venom_duration_ms: u64,
    /// How long the damage shake signal stays on
    pub shake_duration_ms: u64,
    /// Delay before eaten food is replaced
    pub food_respawn_delay_ms: u64,
    /// Delay before a collected power-up is replaced
    pub power_up_respawn_delay_ms: u64,

    pub food_points: u32,
    pub power_up_points: u32,
    pub explosive_points: u32,
    /// Manhattan radius cleared by the explosive
    pub explosive_radius: i32,

    pub initial_lives: u32,
    pub initial_enemies: usize,
    /// Chance per tick that an enemy steps towards the snake
    pub enemy_speed: f64,
    pub initial_food: usize,
    pub initial_power_ups: usize,
    pub start_position: Position,
    pub start_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 150,
            dash_tick_interval_ms: 50,
            dash_duration_ms: 1000,
            venom_duration_ms: 5000,
            shake_duration_ms: 300,
            food_respawn_delay_ms: 2000,
            power_up_respawn_delay_ms: 3000,
            food_points: 20,
            power_up_points: 10,
            explosive_points: 50,
            explosive_radius: 3,
            initial_lives: 3,
            initial_enemies: 3,
            enemy_speed: 0.5,
            initial_food: 1,
            initial_power_ups: 1,
            start_position: Position::new(10, 10),
            start_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Load overrides from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
        ensure!(
            self.dash_tick_interval_ms > 0,
            "dash_tick_interval_ms must be positive"
        );
        ensure!(
            (0.0..=1.0).contains(&self.enemy_speed),
            "enemy_speed must be within [0, 1], got {}",
            self.enemy_speed
        );
        ensure!(self.initial_lives > 0, "initial_lives must be at least 1");
        ensure!(
            self.start_position.wrapped() == self.start_position,
            "start_position {:?} lies outside the {}x{} grid",
            self.start_position,
            GRID_SIZE,
            GRID_SIZE
        );
        Ok(())
    }
}
