//! Winner cache invariant: the cached line matches the displayed board.

use super::super::GameSession;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: `winner` equals the win evaluator applied to the board at
/// the step pointer.
pub struct CachedWinnerInvariant;

impl Invariant<GameSession> for CachedWinnerInvariant {
    fn holds(session: &GameSession) -> bool {
        match session.history.get(session.step) {
            Some(entry) => session.winner == check_winner(entry.board()),
            None => false,
        }
    }

    fn description() -> &'static str {
        "Cached winner matches the displayed board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position::*;

    #[test]
    fn test_holds_after_win_and_jump_back() {
        let mut session = GameSession::replay([TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
        assert!(session.winner().is_some());
        assert!(CachedWinnerInvariant::holds(&session));

        session.jump_to(2).unwrap();
        assert!(session.winner().is_none());
        assert!(CachedWinnerInvariant::holds(&session));
    }

    #[test]
    fn test_stale_cache_violates() {
        let mut session = GameSession::new();
        session.winner = Some([0, 1, 2]);
        assert!(!CachedWinnerInvariant::holds(&session));
    }
}
