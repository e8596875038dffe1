//! Monotonic board invariant: marks are never moved or removed.

use super::super::{Session, Square};
use super::Invariant;

/// Invariant: each entry's board keeps every mark of the entry before it.
///
/// Together with [`MarkCountInvariant`](super::MarkCountInvariant) this
/// means every entry adds exactly one mark to its predecessor.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        session.history.entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            before
                .cells()
                .all(|cell| cell.value == Square::Empty || after.get(cell.id) == cell.value)
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
