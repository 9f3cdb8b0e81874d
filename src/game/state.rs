use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta (no wrapping)
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    pub body: VecDeque<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose extra segments trail behind the head
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);

        let (dx, dy) = direction.delta();
        for _ in 1..length {
            let last = body[body.len() - 1];
            body.push_back(last.moved_by(-dx, -dy).wrapped());
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first
    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least a head");
        Self {
            body: segments.into(),
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Whether `pos` lies on the snake. When `tail_moves_away` is set the last
    /// segment is skipped, since it is vacated during the same tick.
    pub fn occupies(&self, pos: Position, tail_moves_away: bool) -> bool {
        let len = if tail_moves_away {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        self.body.iter().take(len).any(|segment| *segment == pos)
    }

    /// Prepend a new head, dropping the tail unless the snake grows
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Identity of a spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// A chaser that hurts the snake on contact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Position,
    /// Probability in [0, 1] of stepping towards the snake on a tick
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Food {
    pub id: EntityId,
    pub position: Position,
}

/// Kind of collectible power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    /// Short burst of speed with immunity to enemies
    Dash,
    /// Clears nearby enemies
    Explosive,
    /// Temporary score multiplier
    Venom,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Dash,
        PowerUpKind::Explosive,
        PowerUpKind::Venom,
    ];
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PowerUpKind::Dash => "Dash",
            PowerUpKind::Explosive => "Explosive",
            PowerUpKind::Venom => "Venom",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUp {
    pub id: EntityId,
    pub kind: PowerUpKind,
    pub position: Position,
}

/// Complete simulation state of one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub enemies: Vec<Enemy>,
    pub food: Vec<Food>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub multiplier: u32,
    pub lives: u32,
    /// Power-up held by the player, waiting for activation
    pub active_power_up: Option<PowerUpKind>,
    pub is_dashing: bool,
    pub game_over: bool,
    /// Current spacing between ticks in milliseconds
    pub tick_interval_ms: u64,
    pub ticks: u64,
    /// Session this state belongs to; deferred events of other sessions are ignored
    pub generation: u64,
}

impl GameState {
    /// Create a fresh state with no entities besides the snake
    pub fn new(snake: Snake, lives: u32, tick_interval_ms: u64) -> Self {
        Self {
            snake,
            enemies: Vec::new(),
            food: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            multiplier: 1,
            lives,
            active_power_up: None,
            is_dashing: false,
            game_over: false,
            tick_interval_ms,
            ticks: 0,
            generation: 0,
        }
    }
}
