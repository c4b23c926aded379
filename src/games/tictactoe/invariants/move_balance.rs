//! Move balance invariant: B moves first, so B is never behind and never
//! more than one move ahead.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `|moves_b| - |moves_a|` is 0 or 1.
pub struct MoveBalanceInvariant;

impl Invariant<GameState> for MoveBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let a = state.moves(Player::A).len();
        let b = state.moves(Player::B).len();
        b == a || b == a + 1
    }

    fn description() -> &'static str {
        "Player B is level with or one move ahead of player A"
    }
}
