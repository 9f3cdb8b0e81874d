use serde::Serialize;

use super::state::{GameState, Position};

/// Why the snake lost a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCause {
    SelfCollision,
    Enemy,
}

/// Everything the next head position runs into on one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collisions {
    /// Index into `GameState::food` of the first food under the head
    pub food: Option<usize>,
    /// Index into `GameState::power_ups` of the first power-up under the head
    pub power_up: Option<usize>,
    pub self_hit: bool,
    pub enemy_hit: bool,
}

impl Collisions {
    pub fn grows(&self) -> bool {
        self.food.is_some()
    }

    /// Damage causes in the order they are applied. Each cause counts once.
    pub fn damage(&self) -> Vec<DamageCause> {
        let mut causes = Vec::with_capacity(2);
        if self.self_hit {
            causes.push(DamageCause::SelfCollision);
        }
        if self.enemy_hit {
            causes.push(DamageCause::Enemy);
        }
        causes
    }
}

/// Determine what `new_head` hits, before anything moves.
///
/// Food is looked up first because a growth move keeps the tail in place,
/// which matters for the self-collision test.
pub fn resolve(state: &GameState, new_head: Position) -> Collisions {
    let food = state.food.iter().position(|f| f.position == new_head);
    let power_up = state.power_ups.iter().position(|p| p.position == new_head);

    let self_hit = state.snake.occupies(new_head, food.is_none());
    let enemy_hit =
        !state.is_dashing && state.enemies.iter().any(|e| e.position == new_head);

    Collisions {
        food,
        power_up,
        self_hit,
        enemy_hit,
    }
}

/// Take one life. Returns true if this ended the game.
pub fn take_damage(state: &mut GameState) -> bool {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.game_over = true;
    }
    state.game_over
}
