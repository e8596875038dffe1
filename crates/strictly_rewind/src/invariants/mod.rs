//! First-class invariants for a session.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked as move postconditions in debug builds
//! and can be tested independently.

pub mod alternating_turn;
pub mod dense_sequence;
pub mod mark_count;
pub mod monotonic_board;
pub mod settled_status;
pub mod snapshot_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use dense_sequence::DenseSequenceInvariant;
pub use mark_count::MarkCountInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use settled_status::SettledStatusInvariant;
pub use snapshot_consistent::SnapshotConsistentInvariant;

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
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Records a violation unless `I` holds.
fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4, I5, I6> InvariantSet<S> for (I1, I2, I3, I4, I5, I6)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
    I5: Invariant<S>,
    I6: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        check_one::<S, I5>(state, &mut violations);
        check_one::<S, I6>(state, &mut violations);
        into_result(violations)
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    SnapshotConsistentInvariant,
    DenseSequenceInvariant,
    MarkCountInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    SettledStatusInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Session};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&Session::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_selection() {
        let session = Session::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .expect("legal game");
        assert!(SessionInvariants::check_all(&session).is_ok());

        let back = session.select_entry(1).expect("entry exists");
        assert!(SessionInvariants::check_all(&back).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = Session::replay(&[Position::Center]).expect("legal game");
        session.board = session.board.with_mark(Position::TopLeft, Player::X);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SnapshotConsistentInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (DenseSequenceInvariant, MarkCountInvariant);
        assert!(TwoInvariants::check_all(&Session::new()).is_ok());
    }
}
