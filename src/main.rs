//! Tic-tac-toe - unified CLI
//!
//! Interactive terminal play or headless replay of a move list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_tictactoe::{AppConfig, ReplayFormat, run_replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_headless(&config, &moves, json),
    }
}

/// Run the interactive terminal UI, logging to the configured file
fn run_play(config: &AppConfig) -> Result<()> {
    init_file_logging(config.log_file())?;
    info!(log_file = %config.log_file().display(), "Starting tictactoe");
    tui::run_tui(config)
}

/// Replay moves without a UI, logging to stderr
fn run_headless(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = if json {
        ReplayFormat::Json
    } else {
        ReplayFormat::Text
    };
    let stdout = std::io::stdout();
    let engine = run_replay(moves, config, format, stdout.lock())?;
    info!(phase = %engine.phase(), "Replay finished");
    Ok(())
}

/// Setup logging to file to avoid interfering with the TUI
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
