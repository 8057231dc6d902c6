//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The session records each
//! accepted move next to the board it produced, which is what the move list
//! describes.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move or a jump was not applied.
///
/// None of these are failures of the game: the UI treats every one of them
/// as "nothing happens".
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0.label())]
    SquareOccupied(#[error(not(source))] Position),

    /// A line is already complete at the displayed step.
    #[display("Game is already over")]
    GameOver,

    /// The requested history step does not exist.
    #[display("Step {} is outside the history (length {})", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}
