//! Board snapshots recorded by a session.

use super::{Board, Move};
use serde::{Deserialize, Serialize};

/// One step of a game: the board after a move, plus the move itself.
///
/// The first entry of every history is the empty board with no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    #[serde(rename = "move")]
    mv: Option<Move>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            mv: None,
        }
    }

    /// Records the result of applying `mv` to the previous board.
    pub(crate) fn after(previous: &Board, mv: Move) -> Self {
        Self {
            board: previous.with_mark(mv.position, mv.mark),
            mv: Some(mv),
        }
    }

    /// Assembles an entry without checking it. Test-only.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, mv: Option<Move>) -> Self {
        Self { board, mv }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this board, `None` for the initial entry.
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    /// Human description of the move, e.g. `X -> (0, 2)`.
    pub fn description(&self) -> Option<String> {
        self.mv.map(|mv| mv.to_string())
    }

    /// Label for jumping to this entry in a move list.
    pub fn jump_label(&self) -> String {
        match self.description() {
            Some(desc) => format!("Go to move: {}", desc),
            None => "Go to game start".to_string(),
        }
    }
}
