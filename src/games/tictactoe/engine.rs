//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the [`GameState`] and is the only thing that mutates
//! it. It never renders and never reads input: callers hand it a cell index
//! and render whatever [`MoveOutcome`] comes back.

use super::action::{MoveOutcome, Rejection};
use super::invariants;
use super::phases::Phase;
use super::rules::{has_winning_combination, is_board_full};
use super::{GameState, Player, Position, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with a fresh game, player B to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the player on turn (or the last mover once finished).
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        Phase::from_terminal(self.state.is_terminal())
    }

    /// Returns the winner, if the game finished with a completed line.
    pub fn winner(&self) -> Option<Player> {
        if !self.state.is_terminal() {
            return None;
        }
        let player = self.state.current_player();
        has_winning_combination(self.state.moves(player)).then_some(player)
    }

    /// Selects the cell at `index` (0-8) for the current player.
    ///
    /// Selecting after the game ended, an occupied cell, or an index off the
    /// board is a no-op that returns [`MoveOutcome::Rejected`]. Otherwise the
    /// cell is claimed and the result is checked: a completed line wins
    /// (even on a full board), a full board without a line ties, and any
    /// other move passes the turn.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn select_cell(&mut self, index: usize) -> MoveOutcome {
        let pos = match self.check_selection(index) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(%rejection, "Selection rejected");
                return MoveOutcome::Rejected(rejection);
            }
        };

        let player = self.state.current_player();
        self.state.claim(pos);

        let outcome = if has_winning_combination(self.state.moves(player)) {
            self.state.finish();
            info!(?player, position = %pos, "Player completed a line");
            MoveOutcome::Win(player)
        } else if is_board_full(self.state.moves(Player::A), self.state.moves(Player::B)) {
            self.state.finish();
            info!(position = %pos, "Board full without a line");
            MoveOutcome::Tie
        } else {
            self.state.switch_player();
            debug!(position = %pos, next = ?self.state.current_player(), "Move accepted");
            MoveOutcome::Continue(self.state.current_player())
        };

        debug_assert!(
            invariants::check_state(&self.state).is_ok(),
            "state invariants violated after {:?}: {:?}",
            outcome,
            invariants::check_state(&self.state)
        );

        outcome
    }

    /// Resets to a fresh game: empty board, player B to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous_phase = %self.phase(), "Restarting game");
        self.state = GameState::new();
    }

    /// Checks whether the cell at `index` is claimed by either player.
    ///
    /// Indices off the board are never occupied.
    pub fn is_occupied(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.state.occupied().contains(pos))
    }

    /// Returns the occupancy of the cell at `index`.
    ///
    /// Indices off the board read as [`Square::Empty`].
    pub fn owner_of(&self, index: usize) -> Square {
        Position::from_index(index)
            .map(|pos| self.state.square(pos))
            .unwrap_or(Square::Empty)
    }

    /// Returns the unclaimed positions in index order.
    ///
    /// Empty once the game is finished.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.state.occupied())
    }

    fn check_selection(&self, index: usize) -> Result<Position, Rejection> {
        if self.state.is_terminal() {
            return Err(Rejection::GameOver);
        }
        let pos = Position::from_index(index).ok_or(Rejection::OutOfBounds(index))?;
        if self.state.occupied().contains(pos) {
            return Err(Rejection::Occupied(pos));
        }
        Ok(pos)
    }
}
