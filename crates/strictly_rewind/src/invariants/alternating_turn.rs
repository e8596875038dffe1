//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Session};
use super::Invariant;

/// Invariant: an ongoing entry with sequence `n` has X to move when `n` is
/// even and O when `n` is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        session.history.entries().iter().all(|entry| {
            match entry.status().to_move() {
                Some(player) => {
                    let expected = if entry.sequence() % 2 == 0 {
                        Player::X
                    } else {
                        Player::O
                    };
                    player == expected
                }
                None => true,
            }
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, HistoryLog, Position};

    #[test]
    fn test_holds_for_played_game() {
        let session = Session::replay(&[Position::Center, Position::TopLeft, Position::TopRight])
            .expect("legal");
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut session = Session::new();
        let mut history = HistoryLog::new();
        let board = session.board.with_mark(Position::Center, Player::X);
        history.record(0, board, GameStatus::ToMove(Player::X));
        session.history = history;

        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
