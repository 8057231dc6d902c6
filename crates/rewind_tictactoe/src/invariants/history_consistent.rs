//! History consistency invariant: each entry is its predecessor plus one move.

use super::super::{GameSession, HistoryEntry, Mark};
use super::Invariant;

/// Invariant: the history is a valid chain of snapshots.
///
/// Entry 0 is the empty board with no move. Every later entry `i` records a
/// move by the mark for step `i - 1` onto a square that was empty in entry
/// `i - 1`, and its board is exactly that board plus the move. It follows
/// that entry `i` has `i` occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let Some(first) = session.history.first() else {
            return false;
        };
        if *first != HistoryEntry::initial() {
            return false;
        }

        session
            .history
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                match next.mv() {
                    Some(mv) => {
                        mv.mark == Mark::for_step(i)
                            && prev.board().is_empty(mv.position)
                            && *next.board() == prev.board().with_mark(mv.position, mv.mark)
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each history entry is the previous board plus its recorded move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let session = GameSession::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]);
        assert!(HistoryConsistentInvariant::holds(&session));
        for (i, entry) in session.history().iter().enumerate() {
            assert_eq!(entry.board().occupied(), i);
        }
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut session = GameSession::replay([Position::Center]);
        let mut board = *session.history[1].board();
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        session.history[1] = HistoryEntry::from_parts(board, session.history[1].mv());
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_full_game_holds_after_branching() {
        let mut session = GameSession::replay([
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
        ]);
        session.jump_to(2).unwrap();
        session.play(Position::BottomRight).unwrap();
        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 4);
    }
}
