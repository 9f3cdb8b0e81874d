//! Random placement of food, power-ups and enemies.
//!
//! Positions are uniform over the grid and never checked against what is
//! already there; an overlap simply resolves on the next collision check.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::GRID_SIZE;
use super::state::{Enemy, EntityId, Food, Position, PowerUp, PowerUpKind};

pub struct Spawner {
    rng: StdRng,
    next_id: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible spawner for tests and headless runs
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng, next_id: 0 }
    }

    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    pub fn random_position(&mut self) -> Position {
        Position::new(
            self.rng.gen_range(0..GRID_SIZE),
            self.rng.gen_range(0..GRID_SIZE),
        )
    }

    pub fn spawn_food(&mut self) -> Food {
        Food {
            id: self.next_id(),
            position: self.random_position(),
        }
    }

    pub fn spawn_power_up(&mut self) -> PowerUp {
        let kind = PowerUpKind::ALL[self.rng.gen_range(0..PowerUpKind::ALL.len())];
        PowerUp {
            id: self.next_id(),
            kind,
            position: self.random_position(),
        }
    }

    pub fn spawn_enemies(&mut self, count: usize, speed: f64) -> Vec<Enemy> {
        (0..count)
            .map(|_| Enemy {
                id: self.next_id(),
                position: self.random_position(),
                speed,
            })
            .collect()
    }

    /// True with the given probability
    pub fn roll(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
