//! Status line messages shown after each accepted move.

use super::{MoveOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Language of the status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// German.
    De,
}

/// Display labels for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Labels {
    /// Label for player A.
    pub a: String,
    /// Label for player B.
    pub b: String,
}

impl Labels {
    /// Returns the label of a player.
    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new("X".to_string(), "O".to_string())
    }
}

/// A status message, independent of language and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusMessage {
    /// The player is on turn.
    Turn(Player),
    /// The player won.
    Won(Player),
    /// The board filled up without a winner.
    Tie,
}

impl StatusMessage {
    /// Maps a move outcome to the message to show, if any.
    ///
    /// Rejected selections show nothing; the previous message stays.
    pub fn from_outcome(outcome: &MoveOutcome) -> Option<Self> {
        match outcome {
            MoveOutcome::Rejected(_) => None,
            MoveOutcome::Continue(player) => Some(StatusMessage::Turn(*player)),
            MoveOutcome::Win(player) => Some(StatusMessage::Won(*player)),
            MoveOutcome::Tie => Some(StatusMessage::Tie),
        }
    }

    /// Renders the message text.
    #[instrument(level = "trace", skip(labels))]
    pub fn render(&self, labels: &Labels, locale: Locale) -> String {
        match (locale, self) {
            (Locale::En, StatusMessage::Turn(p)) => format!("Player {} is on turn!", labels.of(*p)),
            (Locale::En, StatusMessage::Won(p)) => format!("Player {} has won!", labels.of(*p)),
            (Locale::En, StatusMessage::Tie) => "The game ends in a tie!".to_string(),
            (Locale::De, StatusMessage::Turn(p)) => {
                format!("Spieler {} ist an der Reihe!", labels.of(*p))
            }
            (Locale::De, StatusMessage::Won(p)) => {
                format!("Spieler {} hat gewonnen!", labels.of(*p))
            }
            (Locale::De, StatusMessage::Tie) => "Das Spiel endet unentschieden!".to_string(),
        }
    }
}
