//! Rewind tic-tac-toe - pure game logic with time-travel history.
//!
//! A [`GameSession`] records a snapshot of the board after every move. The
//! step pointer can be moved back to any snapshot; the next move from there
//! discards everything after it and continues on a new branch.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, GameStatus, Mark, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::Center).unwrap();
//! session.play(Position::TopLeft).unwrap();
//! assert_eq!(session.to_move(), Mark::X);
//!
//! session.jump_to(1).unwrap();
//! assert_eq!(session.to_move(), Mark::O);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full};
pub use session::GameSession;
pub use types::{Board, GameStatus, Mark, Square, WinningLine};
