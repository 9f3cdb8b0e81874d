use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

/// Intent produced by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    /// Fire the held power-up
    UsePowerUp,
    /// Leave the start screen
    Start,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = Self::direction_for(key.code) {
            return KeyAction::GameAction(Action::Move(direction));
        }

        match key.code {
            KeyCode::Char(' ') => KeyAction::UsePowerUp,
            KeyCode::Enter => KeyAction::Start,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'r' => KeyAction::Restart,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    /// Arrow keys and WASD, either case
    fn direction_for(code: KeyCode) -> Option<Direction> {
        let direction = match code {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Direction::Up,
                's' => Direction::Down,
                'a' => Direction::Left,
                'd' => Direction::Right,
                _ => return None,
            },
            _ => return None,
        };
        Some(direction)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn moves(direction: Direction) -> KeyAction {
        KeyAction::GameAction(Action::Move(direction))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Up), moves(Direction::Up));
        assert_eq!(key(KeyCode::Down), moves(Direction::Down));
        assert_eq!(key(KeyCode::Left), moves(Direction::Left));
        assert_eq!(key(KeyCode::Right), moves(Direction::Right));
    }

    #[test]
    fn test_wasd_any_case() {
        assert_eq!(key(KeyCode::Char('w')), moves(Direction::Up));
        assert_eq!(key(KeyCode::Char('A')), moves(Direction::Left));
        assert_eq!(key(KeyCode::Char('s')), moves(Direction::Down));
        assert_eq!(key(KeyCode::Char('D')), moves(Direction::Right));
    }

    #[test]
    fn test_power_up_and_start() {
        assert_eq!(key(KeyCode::Char(' ')), KeyAction::UsePowerUp);
        assert_eq!(key(KeyCode::Enter), KeyAction::Start);
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(key(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(key(KeyCode::Esc), KeyAction::Quit);
        assert_eq!(key(KeyCode::Char('R')), KeyAction::Restart);
        assert_eq!(key(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(key(KeyCode::Tab), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
