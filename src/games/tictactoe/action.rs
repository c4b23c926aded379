//! Results of applying a cell selection.
//!
//! Selections are never errors: an illegal selection is a normal
//! [`MoveOutcome::Rejected`] and leaves the game untouched.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Why a selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already ended; only a restart is accepted.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already claimed.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The index does not name a cell on the board.
    #[display("Index {} is outside the board (0-8)", _0)]
    OutOfBounds(usize),
}

/// Result of [`GameEngine::select_cell`](super::GameEngine::select_cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Selection ignored; state unchanged.
    Rejected(Rejection),
    /// Move accepted, game goes on; carries the player now on turn.
    Continue(Player),
    /// Move completed a line; carries the winner.
    Win(Player),
    /// Move filled the board without a line.
    Tie,
}

impl MoveOutcome {
    /// Whether the selection changed the game.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Whether this outcome ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win(_) | MoveOutcome::Tie)
    }
}
