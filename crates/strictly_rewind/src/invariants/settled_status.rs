//! Settled status invariant: every status follows from its board.

use super::super::{Outcome, Session, rules};
use super::Invariant;

/// Invariant: an entry is won exactly when its board has a completed line
/// for that player, drawn exactly when the board is full without one, and
/// no entry follows a finished game.
pub struct SettledStatusInvariant;

impl Invariant<Session> for SettledStatusInvariant {
    fn holds(session: &Session) -> bool {
        let entries = session.history.entries();
        let settled = entries.iter().all(|entry| {
            let board = entry.board();
            let expected = match rules::check_winner(board) {
                Some(player) => Some(Outcome::Winner(player)),
                None if rules::is_full(board) => Some(Outcome::Draw),
                None => None,
            };
            entry.status().outcome() == expected
        });
        let last = entries.len().saturating_sub(1);
        let ends_at_terminal = entries
            .iter()
            .take(last)
            .all(|entry| !entry.status().is_terminal());
        settled && ends_at_terminal
    }

    fn description() -> &'static str {
        "Each status follows from its board and nothing follows a finished game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameStatus, HistoryLog, Player, Position};

    #[test]
    fn test_holds_for_won_game() {
        let session = Session::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .expect("legal");
        assert!(session.is_terminal());
        assert!(SettledStatusInvariant::holds(&session));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut session = Session::new();
        let mut history = HistoryLog::new();
        let board = Board::new().with_mark(Position::Center, Player::X);
        history.record(0, board, GameStatus::Draw);
        session.history = history;

        assert!(!SettledStatusInvariant::holds(&session));
    }
}
