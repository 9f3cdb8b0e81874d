use serde::Serialize;

use super::action::Direction;
use super::state::{GameState, Position, PowerUpKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerUpCell {
    pub position: Position,
    pub kind: PowerUpKind,
}

/// Read-only view of a session handed to the frontend after each update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// Head first
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub is_dashing: bool,
    pub enemies: Vec<Position>,
    pub food: Vec<Position>,
    pub power_ups: Vec<PowerUpCell>,
    pub score: u32,
    pub multiplier: u32,
    pub lives: u32,
    pub active_power_up: Option<PowerUpKind>,
    pub game_over: bool,
    /// Damage feedback is on
    pub shaking: bool,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, shaking: bool) -> Self {
        Self {
            snake: state.snake.body.iter().copied().collect(),
            direction: state.snake.direction,
            is_dashing: state.is_dashing,
            enemies: state.enemies.iter().map(|e| e.position).collect(),
            food: state.food.iter().map(|f| f.position).collect(),
            power_ups: state
                .power_ups
                .iter()
                .map(|p| PowerUpCell {
                    position: p.position,
                    kind: p.kind,
                })
                .collect(),
            score: state.score,
            multiplier: state.multiplier,
            lives: state.lives,
            active_power_up: state.active_power_up,
            game_over: state.game_over,
            shaking,
            ticks: state.ticks,
        }
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{EntityId, PowerUp, Snake};

    #[test]
    fn test_capture_and_json() {
        let mut state = GameState::new(Snake::new(Position::new(4, 4), Direction::Down, 2), 3, 150);
        state.power_ups.push(PowerUp {
            id: EntityId(1),
            kind: PowerUpKind::Explosive,
            position: Position::new(1, 2),
        });
        state.active_power_up = Some(PowerUpKind::Venom);

        let snapshot = GameSnapshot::capture(&state, true);
        assert_eq!(snapshot.snake, vec![Position::new(4, 4), Position::new(4, 3)]);
        assert_eq!(snapshot.head(), Position::new(4, 4));
        assert!(snapshot.shaking);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["direction"], "DOWN");
        assert_eq!(json["active_power_up"], "venom");
        assert_eq!(json["power_ups"][0]["kind"], "explosive");
    }
}
