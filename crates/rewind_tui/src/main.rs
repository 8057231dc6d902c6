//! Rewind - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::{GameSession, Position};
use rewind_tui::cli::{Cli, Command};
use rewind_tui::{TuiConfig, replay, terminal};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config, moves } => run_play(config, moves),
        Command::Replay { moves, jump } => run_replay(moves, jump),
    }
}

/// Run the interactive game.
fn run_play(config_path: Option<PathBuf>, moves: Vec<Position>) -> Result<()> {
    let config = TuiConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    terminal::init_file_tracing(&config)?;

    info!(preplayed = moves.len(), "Starting game");
    terminal::run_tui(&config, GameSession::replay(moves))
}

/// Print a replayed game to stdout.
fn run_replay(moves: Vec<Position>, jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(moves = moves.len(), ?jump, "Replaying");
    let mut session = GameSession::replay(moves);
    if let Some(step) = jump {
        session
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    print!("{}", replay::render_text(&session));
    Ok(())
}
