//! Step pointer invariant: the pointer names a recorded entry.

use super::super::GameSession;
use super::Invariant;

/// Invariant: history is never empty and `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step < session.history.len()
    }

    fn description() -> &'static str {
        "Step pointer is a valid history index"
    }
}
