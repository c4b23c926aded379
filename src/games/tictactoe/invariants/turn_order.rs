//! Turn order invariant: the current player follows from the move counts.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the current player matches the move counts.
///
/// While the game runs, B is on turn when both players have made the same
/// number of moves and A otherwise. Once the game ends, the current player
/// is whoever made the last move.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let level = state.moves(Player::A).len() == state.moves(Player::B).len();
        let expected = match (state.is_terminal(), level) {
            (false, true) => Player::B,
            (false, false) => Player::A,
            (true, true) => Player::A,
            (true, false) => Player::B,
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player follows from move counts (B first, then alternating)"
    }
}
