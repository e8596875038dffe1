//! Dense sequence invariant: entry `i` carries sequence number `i`.

use super::super::{Board, GameStatus, Session};
use super::Invariant;

/// Invariant: sequence numbers run 0..len without gaps, entry 0 is the
/// initial empty board, and `current` points into the log.
pub struct DenseSequenceInvariant;

impl Invariant<Session> for DenseSequenceInvariant {
    fn holds(session: &Session) -> bool {
        let entries = session.history.entries();

        let dense = entries
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.sequence() == i);

        let starts_empty = entries
            .first()
            .is_some_and(|e| e.board() == &Board::new() && e.status() == GameStatus::START);

        dense && starts_empty && session.current < entries.len()
    }

    fn description() -> &'static str {
        "History sequence numbers are dense from the initial empty board"
    }
}
