//! Turn invariant: the active mark follows the step parity.

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: X is active on even steps, O on odd steps.
pub struct ParityTurnInvariant;

impl Invariant<GameSession> for ParityTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session.to_move == Mark::for_step(session.step)
    }

    fn description() -> &'static str {
        "Active mark matches step parity"
    }
}
