//! Tic-tac-toe: state, rules, and the engine that drives them.

mod action;
mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{MoveOutcome, Rejection};
pub use engine::GameEngine;
pub use phases::Phase;
pub use position::Position;
pub use status::{Labels, Locale, StatusMessage};
pub use types::{GameState, MoveSet, Player, Square, StateError};
