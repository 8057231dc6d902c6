//! Terminal front end for rewind tic-tac-toe.
//!
//! The game itself lives in [`rewind_tictactoe`]; this crate draws it with
//! `ratatui`, turns keys and clicks into [`app::Action`]s, and owns the
//! CLI and configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod mouse;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{Action, App, Focus};
pub use config::{ConfigError, TuiConfig};
