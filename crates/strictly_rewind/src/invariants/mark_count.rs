//! Mark count invariant: entry `n` has exactly `n` marks.

use super::super::{Player, Session};
use super::Invariant;

/// Invariant: every entry with sequence `n` has `n` occupied cells, and X
/// leads O by zero or one mark.
pub struct MarkCountInvariant;

impl Invariant<Session> for MarkCountInvariant {
    fn holds(session: &Session) -> bool {
        session.history.entries().iter().all(|entry| {
            let board = entry.board();
            let x = board.count_of(Player::X);
            let o = board.count_of(Player::O);
            board.occupied_count() == entry.sequence() && (x == o || x == o + 1)
        })
    }

    fn description() -> &'static str {
        "Each history entry holds one mark per move, X leading by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryLog, Position};

    #[test]
    fn test_holds_for_played_game() {
        let session = Session::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
            Position::TopRight,
        ])
        .expect("legal");
        assert!(MarkCountInvariant::holds(&session));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut session = Session::new();
        let mut history = HistoryLog::new();
        let board = session
            .board
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::X);
        history.record(0, board, session.status);
        session.history = history;

        assert!(!MarkCountInvariant::holds(&session));
    }
}
