//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(session, move)} apply_move {Q(before, after)}`.

use super::action::MoveError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::{Position, Session};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] from a terminal status.
    #[instrument(skip(session))]
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`] if the cell holds a mark.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &Session) -> Result<(), MoveError> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, then cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &Session) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        CellIsEmpty::check(pos, session)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Target cell is empty
///
/// Postconditions:
/// - Live state equals the selected snapshot
/// - Sequence numbers stay dense
/// - Mark counts match move counts
/// - Players alternate
pub struct MoveContract;

impl Contract<Session, Position> for MoveContract {
    fn pre(session: &Session, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, session)
    }

    fn post(_before: &Session, after: &Session) -> Result<(), MoveError> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
