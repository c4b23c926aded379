//! Game phases.
//!
//! The engine has two phases. `InProgress` accepts selections;
//! `Finished` accepts nothing but a restart.

use serde::{Deserialize, Serialize};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Selections are accepted.
    InProgress,
    /// The game ended in a win or a tie.
    Finished,
}

impl Phase {
    /// Derives the phase from the terminal flag.
    pub fn from_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::InProgress => write!(f, "in progress"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}
