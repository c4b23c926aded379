//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player A (displayed as "X" by default).
    A,
    /// Player B (displayed as "O" by default, moves first).
    B,
}

impl Player {
    /// The player who moves first in a fresh game.
    pub const FIRST: Player = Player::B;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Occupancy of a single cell, derived from the move sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Set of cell positions claimed by one player.
///
/// Stored as a 9-bit mask; bit `i` is set when position `i` is claimed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct MoveSet {
    bits: u16,
}

impl MoveSet {
    /// Creates an empty move set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Builds a move set from positions.
    pub fn from_positions(positions: &[Position]) -> Self {
        positions.iter().fold(Self::new(), |mut set, pos| {
            set.insert(*pos);
            set
        })
    }

    /// Adds a position. Returns `false` if it was already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        let mask = Self::mask(pos);
        let fresh = self.bits & mask == 0;
        self.bits |= mask;
        fresh
    }

    /// Checks whether the position is in the set.
    pub fn contains(&self, pos: Position) -> bool {
        self.bits & Self::mask(pos) != 0
    }

    /// Checks whether every position in `positions` is in the set.
    pub fn contains_all(&self, positions: &[Position]) -> bool {
        positions.iter().all(|pos| self.contains(*pos))
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &MoveSet) -> MoveSet {
        MoveSet {
            bits: self.bits | other.bits,
        }
    }

    /// Checks whether two sets share no positions.
    pub fn is_disjoint(&self, other: &MoveSet) -> bool {
        self.bits & other.bits == 0
    }

    /// Number of positions in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates positions in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.contains(*pos))
    }

    fn mask(pos: Position) -> u16 {
        1 << pos.to_index()
    }
}

impl From<MoveSet> for Vec<usize> {
    fn from(set: MoveSet) -> Self {
        set.iter().map(Position::to_index).collect()
    }
}

impl TryFrom<Vec<usize>> for MoveSet {
    type Error = StateError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        indices.into_iter().try_fold(MoveSet::new(), |mut set, index| {
            let pos = Position::from_index(index).ok_or(StateError::CellOutOfRange { index })?;
            if set.insert(pos) {
                Ok(set)
            } else {
                Err(StateError::DuplicateCell { index })
            }
        })
    }
}

/// Why stored game data could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// A move set names a cell off the board.
    #[display("Cell {} is outside the board (0-8)", index)]
    CellOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A move set names the same cell twice.
    #[display("Cell {} is listed twice", index)]
    DuplicateCell {
        /// The repeated index.
        index: usize,
    },
    /// The state breaks a game invariant.
    #[display("Inconsistent game state: {}", violations)]
    Inconsistent {
        /// Descriptions of the violated invariants.
        violations: String,
    },
}

/// Complete game state.
///
/// Deserialization re-checks every invariant, so a loaded state is one the
/// engine could have reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct GameState {
    /// Player to move next (or the player who made the last move once terminal).
    current_player: Player,
    /// Whether the game has ended.
    is_terminal: bool,
    /// Positions claimed by player A.
    moves_a: MoveSet,
    /// Positions claimed by player B.
    moves_b: MoveSet,
}

impl GameState {
    /// Creates the initial state: empty board, player B to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            current_player: Player::FIRST,
            is_terminal: false,
            moves_a: MoveSet::new(),
            moves_b: MoveSet::new(),
        }
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the move set of the given player.
    pub fn moves(&self, player: Player) -> &MoveSet {
        match player {
            Player::A => &self.moves_a,
            Player::B => &self.moves_b,
        }
    }

    /// All claimed positions.
    pub fn occupied(&self) -> MoveSet {
        self.moves_a.union(&self.moves_b)
    }

    /// Returns the occupancy of a position.
    pub fn square(&self, pos: Position) -> Square {
        if self.moves_a.contains(pos) {
            Square::Occupied(Player::A)
        } else if self.moves_b.contains(pos) {
            Square::Occupied(Player::B)
        } else {
            Square::Empty
        }
    }

    /// Records a position for the current player (unchecked - use `GameEngine::select_cell`).
    pub(super) fn claim(&mut self, pos: Position) {
        match self.current_player {
            Player::A => self.moves_a.insert(pos),
            Player::B => self.moves_b.insert(pos),
        };
    }

    /// Hands the turn to the opponent.
    pub(super) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Marks the game as finished.
    pub(super) fn finish(&mut self) {
        self.is_terminal = true;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(current_player: Player, moves_a: MoveSet, moves_b: MoveSet) -> Self {
        Self {
            current_player,
            is_terminal: false,
            moves_a,
            moves_b,
        }
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StateRecord {
    current_player: Player,
    is_terminal: bool,
    moves_a: MoveSet,
    moves_b: MoveSet,
}

impl TryFrom<StateRecord> for GameState {
    type Error = StateError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let state = GameState {
            current_player: record.current_player,
            is_terminal: record.is_terminal,
            moves_a: record.moves_a,
            moves_b: record.moves_b,
        };
        super::invariants::check_state(&state).map_err(|violations| {
            StateError::Inconsistent {
                violations: violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            }
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
