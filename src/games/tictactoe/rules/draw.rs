//! Draw detection logic for tic-tac-toe.

use super::super::MoveSet;
use tracing::instrument;

/// Checks if the board is full (all 9 squares claimed by either player).
///
/// A full board with no winner is a tie.
#[instrument(level = "trace")]
pub fn is_board_full(moves_a: &MoveSet, moves_b: &MoveSet) -> bool {
    moves_a.union(moves_b).len() == 9
}
