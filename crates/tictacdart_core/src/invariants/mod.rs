//! First-class game invariants.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are checked after every successful mutation in debug builds and
//! are testable independently.

mod alternating_turn;
mod history_consistent;
mod monotonic_board;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;
pub use monotonic_board::MonotonicBoard;

use crate::controller::TurnController;

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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MonotonicBoard, HistoryConsistent, AlternatingTurn);

/// Asserts that all game invariants hold (debug builds only).
pub fn assert_invariants(game: &TurnController) {
    debug_assert!(
        MonotonicBoard::holds(game),
        "{}",
        MonotonicBoard::description()
    );
    debug_assert!(
        HistoryConsistent::holds(game),
        "{}",
        HistoryConsistent::description()
    );
    debug_assert!(
        AlternatingTurn::holds(game),
        "{}",
        AlternatingTurn::description()
    );
}
