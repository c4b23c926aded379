//! Headless play: apply a list of moves and report each result.

use crate::config::AppConfig;
use crate::controller::{GameController, Handled, InputEvent, StatusLine};
use crate::games::tictactoe::{GameEngine, Labels, MoveOutcome, Position, Square};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::{instrument, warn};

/// Output format of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayFormat {
    /// One status line per move, then the board.
    #[default]
    Text,
    /// One JSON object per move, then the final state.
    Json,
}

/// One replayed move, as reported in JSON output.
#[derive(Debug, Serialize)]
struct MoveReport<'a> {
    input: &'a str,
    index: Option<usize>,
    restarted: bool,
    outcome: Option<MoveOutcome>,
    message: Option<&'a str>,
}

/// Resolves a move argument to a board index.
///
/// Plain numbers pass through unchecked so the engine can reject
/// out-of-range indices; anything else must be a position label.
pub fn parse_move(input: &str) -> Option<usize> {
    let input = input.trim();
    input
        .parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(input).map(Position::to_index))
}

/// Resolves a replay argument to an input event.
///
/// `restart` (or `r`) asks for a new game; anything else goes through
/// [`parse_move`].
pub fn parse_input(input: &str) -> Option<InputEvent> {
    match input.trim().to_ascii_lowercase().as_str() {
        "restart" | "r" => Some(InputEvent::RestartRequested),
        _ => parse_move(input).map(InputEvent::CellSelected),
    }
}

/// Applies `moves` in order to a fresh game and writes the results to `out`.
#[instrument(skip(config, out))]
pub fn run_replay<W: Write>(
    moves: &[String],
    config: &AppConfig,
    format: ReplayFormat,
    mut out: W,
) -> Result<GameEngine> {
    let mut controller =
        GameController::new(StatusLine::default(), config.labels(), *config.locale());

    if format == ReplayFormat::Text {
        writeln!(out, "{}", controller.sink().text())?;
    }

    for input in moves {
        let handled = match parse_input(input) {
            Some(event) => Some(controller.handle(event)),
            None => {
                warn!(input = %input, "Unrecognized move");
                None
            }
        };

        let (index, outcome) = match handled {
            Some(Handled::Move(outcome)) => (parse_move(input), Some(outcome)),
            _ => (None, None),
        };
        let restarted = handled == Some(Handled::Restarted);
        let message = (restarted || outcome.is_some_and(|o| o.is_accepted()))
            .then(|| controller.sink().text().as_str());

        match format {
            ReplayFormat::Text => match (outcome, message) {
                (_, Some(message)) => writeln!(out, "{}", message)?,
                (Some(MoveOutcome::Rejected(rejection)), _) => {
                    writeln!(out, "Ignored {}: {}", input, rejection)?
                }
                _ => writeln!(out, "Ignored {}: not a cell", input)?,
            },
            ReplayFormat::Json => {
                let report = MoveReport {
                    input,
                    index,
                    restarted,
                    outcome,
                    message,
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
        }
    }

    let engine = controller.engine().clone();
    match format {
        ReplayFormat::Text => writeln!(out, "\n{}", board_text(&engine, controller.labels()))?,
        ReplayFormat::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "phase": engine.phase(), "state": engine.state() })
        )?,
    }

    Ok(engine)
}

/// Formats the board as a human-readable string.
///
/// Empty cells show their 1-based number, claimed cells the owner's label.
pub fn board_text(engine: &GameEngine, labels: &Labels) -> String {
    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match engine.owner_of(index) {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => labels.of(player).to_string(),
                }
            })
            .collect();
        result.push_str(&cells.join("|"));
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}
