//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every session
//! transition. They are testable independently and serve as documentation
//! of what a session guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for the 4-tuple that makes up [`SessionInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cached_winner;
pub mod history_consistent;
pub mod parity_turn;
pub mod step_in_bounds;

pub use cached_winner::CachedWinnerInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use parity_turn::ParityTurnInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All session invariants as a composable set.
///
/// `StepInBounds` comes first: the others index history by the step
/// pointer and report a violation instead of panicking when it is out of
/// range.
pub type SessionInvariants = (
    StepInBoundsInvariant,
    ParityTurnInvariant,
    CachedWinnerInvariant,
    HistoryConsistentInvariant,
);
