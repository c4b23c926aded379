//! Strictly tic-tac-toe - a two-player game engine with a terminal front-end
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the game state and applies cell selections
//! - **Controller**: [`GameController`] turns input events into engine calls and
//!   renders status messages to a [`StatusSink`]
//! - **Front-ends**: an interactive terminal UI and a headless replay
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.select_cell(4), MoveOutcome::Continue(Player::A));
//! assert!(!engine.select_cell(4).is_accepted());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Controller
pub use controller::{GameController, Handled, InputEvent, StatusLine, StatusSink};

// Crate-level exports - Replay
pub use replay::{ReplayFormat, board_text, parse_input, parse_move, run_replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    GameEngine, GameState, Labels, Locale, MoveOutcome, MoveSet, Phase, Player, Position,
    Rejection, Square, StateError, StatusMessage,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{InvariantViolation, check_state};
pub use games::tictactoe::rules::{WINNING_COMBINATIONS, has_winning_combination, is_board_full};
