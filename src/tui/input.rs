//! Keyboard mapping: keys to cursor moves and input events.

use crate::controller::InputEvent;
use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor to this position.
    Cursor(Position),
    /// Forward an event to the game.
    Input(InputEvent),
    /// Leave the app.
    Quit,
    /// Key has no meaning.
    Ignore,
}

/// Moves cursor based on arrow keys. The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a key to an action.
///
/// Digits 1-9 select the matching cell directly; Enter and Space select the
/// cell under the cursor.
pub fn map_key(key: KeyCode, cursor: Position) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('r') => KeyAction::Input(InputEvent::RestartRequested),
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(digit) => KeyAction::Input(InputEvent::CellSelected(digit as usize - 1)),
            None => KeyAction::Ignore,
        },
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Input(InputEvent::CellSelected(cursor.to_index()))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            map_key(KeyCode::Char('1'), Position::Center),
            KeyAction::Input(InputEvent::CellSelected(0))
        );
        assert_eq!(
            map_key(KeyCode::Char('9'), Position::Center),
            KeyAction::Input(InputEvent::CellSelected(8))
        );
        assert_eq!(map_key(KeyCode::Char('0'), Position::Center), KeyAction::Ignore);
    }

    #[test]
    fn test_enter_selects_cursor() {
        assert_eq!(
            map_key(KeyCode::Enter, Position::BottomLeft),
            KeyAction::Input(InputEvent::CellSelected(6))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::Char('q'), Position::Center), KeyAction::Quit);
        assert_eq!(map_key(KeyCode::Esc, Position::Center), KeyAction::Quit);
        assert_eq!(
            map_key(KeyCode::Char('r'), Position::Center),
            KeyAction::Input(InputEvent::RestartRequested)
        );
    }
}
