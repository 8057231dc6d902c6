//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump back into
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Moves to play before handing over, as cell indices (0-8) or
        /// labels, comma separated
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,
    },

    /// Play a sequence of moves and print the result
    Replay {
        /// Cell indices (0-8) or labels, comma separated
        #[arg(value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// History step to show instead of the last one
        #[arg(long)]
        jump: Option<usize>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: None,
            moves: Vec::new(),
        }
    }
}

/// Parses a board cell from an index or a label such as `top-left`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}
