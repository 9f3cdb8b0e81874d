//! Toroidal grid geometry

use super::action::Direction;
use super::state::Position;

/// Cells per side of the square playfield
pub const GRID_SIZE: i32 = 20;

/// Wrap a single coordinate onto the grid
pub fn wrap(value: i32) -> i32 {
    value.rem_euclid(GRID_SIZE)
}

/// Manhattan distance on the plain (non-wrapped) plane
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

impl Position {
    /// This position with both axes wrapped onto the grid
    pub fn wrapped(&self) -> Self {
        Self::new(wrap(self.x), wrap(self.y))
    }

    /// One cell in `direction`, re-entering on the opposite edge
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy).wrapped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_closure() {
        let right_edge = Position::new(GRID_SIZE - 1, 7);
        assert_eq!(right_edge.stepped(Direction::Right), Position::new(0, 7));

        let left_edge = Position::new(0, 7);
        assert_eq!(
            left_edge.stepped(Direction::Left),
            Position::new(GRID_SIZE - 1, 7)
        );

        assert_eq!(Position::new(3, 0).stepped(Direction::Up), Position::new(3, GRID_SIZE - 1));
        assert_eq!(Position::new(3, GRID_SIZE - 1).stepped(Direction::Down), Position::new(3, 0));
    }

    #[test]
    fn test_wrap_negative_and_large() {
        assert_eq!(wrap(-1), GRID_SIZE - 1);
        assert_eq!(wrap(-GRID_SIZE - 2), GRID_SIZE - 2);
        assert_eq!(wrap(GRID_SIZE * 3 + 4), 4);
        assert_eq!(Position::new(-1, GRID_SIZE).wrapped(), Position::new(GRID_SIZE - 1, 0));
    }

    #[test]
    fn test_manhattan() {
        let head = Position::new(10, 10);
        assert_eq!(manhattan(head, head), 0);
        assert_eq!(manhattan(head, Position::new(12, 9)), 3);
        assert_eq!(manhattan(Position::new(0, 0), Position::new(GRID_SIZE - 1, 0)), GRID_SIZE - 1);
    }
}
