//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, global = true, default_value = strictly_tictactoe::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply moves without a UI and print each result
    Replay {
        /// Moves in order: cell indices 0-8, labels like `center`, or `restart`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
}
