//! Snapshot invariant: the live state is the selected history entry.

use super::super::Session;
use super::Invariant;

/// Invariant: live board and status equal `history[current]`.
pub struct SnapshotConsistentInvariant;

impl Invariant<Session> for SnapshotConsistentInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history
            .get(session.current)
            .is_some_and(|entry| entry.board() == &session.board && entry.status() == session.status)
    }

    fn description() -> &'static str {
        "Live board and status match the selected history entry"
    }
}
