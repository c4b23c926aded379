//! Disjoint moves invariant: no cell is claimed by both players.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the two move sets never overlap.
///
/// Each index 0-8 appears in at most one player's set, so at most
/// 9 moves exist in total.
pub struct DisjointMovesInvariant;

impl Invariant<GameState> for DisjointMovesInvariant {
    fn holds(state: &GameState) -> bool {
        let a = state.moves(Player::A);
        let b = state.moves(Player::B);
        a.is_disjoint(b) && a.len() + b.len() <= 9
    }

    fn description() -> &'static str {
        "Move sets are disjoint and hold at most 9 cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveSet, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(DisjointMovesInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_shared_cell_violates() {
        let state = GameState::from_parts(
            Player::B,
            MoveSet::from_positions(&[Position::Center]),
            MoveSet::from_positions(&[Position::Center]),
        );
        assert!(!DisjointMovesInvariant::holds(&state));
    }
}
