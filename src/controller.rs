//! Wiring between input events, the engine, and a status display.
//!
//! The controller owns one [`GameEngine`] and one [`StatusSink`]. Every
//! input event is handled to completion before the next: the engine
//! transitions, and the resulting message (if any) is rendered to the sink.

use crate::games::tictactoe::{GameEngine, Labels, Locale, MoveOutcome, StatusMessage};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// An event from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The cell at this index (0-8) was selected.
    CellSelected(usize),
    /// The player asked for a new game.
    RestartRequested,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handled {
    /// A cell selection was applied (or rejected).
    Move(MoveOutcome),
    /// The game was reset.
    Restarted,
}

/// Receives rendered status messages.
pub trait StatusSink {
    /// Shows a status message, replacing the previous one.
    fn render(&mut self, message: &str);
}

/// Sink that keeps the most recent message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct StatusLine {
    /// Current message text.
    text: String,
    /// Number of messages rendered so far.
    renders: usize,
}

impl StatusSink for StatusLine {
    fn render(&mut self, message: &str) {
        self.text = message.to_string();
        self.renders += 1;
    }
}

impl StatusSink for Vec<String> {
    fn render(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Drives a [`GameEngine`] from input events and renders to a [`StatusSink`].
#[derive(Debug, Getters)]
pub struct GameController<S> {
    /// The game being played.
    engine: GameEngine,
    /// Where status messages go.
    sink: S,
    /// Player labels used in messages.
    labels: Labels,
    /// Message language.
    locale: Locale,
}

impl<S: StatusSink> GameController<S> {
    /// Creates a controller and renders the opening "on turn" message.
    #[instrument(skip(sink))]
    pub fn new(sink: S, labels: Labels, locale: Locale) -> Self {
        let mut controller = Self {
            engine: GameEngine::new(),
            sink,
            labels,
            locale,
        };
        controller.render_turn();
        controller
    }

    /// Handles one input event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Handled {
        match event {
            InputEvent::CellSelected(index) => {
                let outcome = self.engine.select_cell(index);
                if outcome.is_terminal() {
                    info!(?outcome, "Game over, waiting for restart");
                }
                if let Some(message) = StatusMessage::from_outcome(&outcome) {
                    self.render(message);
                } else {
                    debug!(?outcome, "Nothing to render");
                }
                Handled::Move(outcome)
            }
            InputEvent::RestartRequested => {
                self.engine.restart();
                self.render_turn();
                Handled::Restarted
            }
        }
    }

    /// Returns the rendered text of a message in this controller's labels and locale.
    pub fn message_text(&self, message: StatusMessage) -> String {
        message.render(&self.labels, self.locale)
    }

    /// Consumes the controller, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn render_turn(&mut self) {
        self.render(StatusMessage::Turn(self.engine.current_player()));
    }

    fn render(&mut self, message: StatusMessage) {
        let text = self.message_text(message);
        debug!(%text, "Rendering status");
        self.sink.render(&text);
    }
}
