//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions over move sets, independent of the engine.

pub mod draw;
pub mod win;

pub use draw::is_board_full;
pub use win::{WINNING_COMBINATIONS, has_winning_combination};
