//! Application state and logic.

use super::input::{KeyAction, map_key};
use crate::config::AppConfig;
use crate::controller::{GameController, InputEvent, StatusLine};
use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;
use tracing::{debug, info};

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController<StatusLine>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: GameController::new(StatusLine::default(), config.labels(), *config.locale()),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController<StatusLine> {
        &self.controller
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        self.controller.sink().text()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match map_key(key, self.cursor) {
            KeyAction::Cursor(pos) => self.cursor = pos,
            KeyAction::Input(event) => {
                let handled = self.controller.handle(event);
                debug!(?event, ?handled, "Input handled");
            }
            KeyAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyAction::Ignore => {}
        }
    }

    /// Handles a click on a board cell: moves the cursor there and selects it.
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        let handled = self.controller.handle(InputEvent::CellSelected(pos.to_index()));
        debug!(?pos, ?handled, "Click handled");
    }
}
