//! A game session: move history, step pointer and time travel.
//!
//! The session is a plain value. Every transition is a method that either
//! applies completely or leaves the session untouched.

use super::rules::{check_winner, is_draw};
use super::{Board, GameStatus, HistoryEntry, Mark, Move, MoveError, Position, WinningLine};
use serde::Serialize;
use tracing::{debug, instrument};
#[cfg(debug_assertions)]
use tracing::error;

/// Game session with branch-on-write history.
///
/// Navigating to an earlier step keeps every later entry; the next accepted
/// move discards them before appending.
///
/// Serializable for inspection only. A session is only ever built through
/// [`GameSession::new`] and its transitions, which keep the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
    pub(crate) to_move: Mark,
    pub(crate) winner: Option<WinningLine>,
}

impl GameSession {
    /// Creates a session holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            to_move: Mark::X,
            winner: None,
        }
    }

    /// Builds a session by playing positions in order.
    ///
    /// Rejected positions are skipped, exactly as a click on them would be.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut session = Self::new();
        for pos in positions {
            if let Err(e) = session.play(pos) {
                debug!(position = ?pos, error = %e, "Skipping rejected move during replay");
            }
        }
        session
    }

    /// Every recorded entry, including any beyond the step pointer.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Entries up to and including the step pointer.
    ///
    /// This is what a move list shows: later entries still exist but are
    /// hidden until the next move discards them.
    pub fn visible_history(&self) -> &[HistoryEntry] {
        &self.history[..=self.step]
    }

    /// The step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The cached winning line of the displayed board.
    pub fn winner(&self) -> Option<WinningLine> {
        self.winner
    }

    /// The displayed history entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Whether the cell at `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winner.is_some_and(|line| line.contains(&index))
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        match self.winner {
            Some(line) => match board.squares()[line[0]].mark() {
                Some(mark) => GameStatus::Won { mark, line },
                // A cached line always points at occupied squares.
                None => GameStatus::InProgress,
            },
            None if is_draw(board) => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// One-line status as shown above the move list.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won { mark, .. } => format!("Winner: {}", mark),
            GameStatus::Drawn => "Cat's game".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.to_move),
        }
    }

    /// Plays the active mark at `pos` on the displayed board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed board already has a line.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    ///
    /// In both cases the session is unchanged.
    #[instrument(skip(self), fields(position = ?pos, mark = %self.to_move, step = self.step))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mv = Move::new(self.to_move, pos);
        let entry = HistoryEntry::after(self.board(), mv);

        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating history beyond step pointer");
        }
        self.history.truncate(self.step + 1);
        self.history.push(entry);
        self.step = self.history.len() - 1;
        self.to_move = self.to_move.opponent();
        self.winner = check_winner(entry.board());

        self.check_invariants();

        let status = self.status();
        debug!(move_desc = %mv, ?status, "Move applied");
        Ok(status)
    }

    /// Moves the step pointer to `step`.
    ///
    /// Allowed at any time, including after a win. The active mark comes
    /// from the parity of `step` and the winner is recomputed from that
    /// step's board. No entries are removed.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] if `step` is not a recorded entry.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<GameStatus, MoveError> {
        let len = self.history.len();
        if step >= len {
            return Err(MoveError::StepOutOfRange { step, len });
        }

        self.step = step;
        self.to_move = Mark::for_step(step);
        self.winner = check_winner(self.history[step].board());

        self.check_invariants();

        let status = self.status();
        debug!(?status, "Jumped to step");
        Ok(status)
    }

    /// Asserts session invariants in debug builds.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            for v in &violations {
                error!(invariant = %v.description, "Session invariant violated");
            }
            panic!("{} session invariant(s) violated", violations.len());
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
