//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules are separated from board
//! storage so the session can re-run them against any history snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
