//! Win detection logic for tic-tac-toe.

use super::super::{MoveSet, Position};
use tracing::instrument;

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether a player's moves contain all three positions of any line.
#[instrument(level = "trace")]
pub fn has_winning_combination(moves: &MoveSet) -> bool {
    WINNING_COMBINATIONS
        .iter()
        .any(|line| moves.contains_all(line))
}
