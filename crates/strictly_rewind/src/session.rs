//! Session state and its transitions.
//!
//! A [`Session`] is a plain value. Every transition borrows the current
//! session and returns a new one, so a rejected move can never leave a
//! half-applied state behind.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::{HistoryEntry, HistoryLog, SelectError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules;
use super::{Board, GameStatus, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Live game state plus its history.
///
/// The live board and status always equal the snapshot stored at
/// `history[current]`. Deserialized sessions are accepted only if every
/// [`SessionInvariants`] member holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) current: usize,
    pub(crate) history: HistoryLog,
}

/// Serialized session that has not been checked yet.
#[derive(Deserialize)]
struct SessionParts {
    board: Board,
    status: GameStatus,
    current: usize,
    history: HistoryLog,
}

/// A serialized session or history log that could not have been produced
/// by playing the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid session: {}", reasons.join("; "))]
pub struct InvalidSession {
    /// Descriptions of every check that failed.
    pub reasons: Vec<String>,
}

impl InvalidSession {
    /// Creates an error with a single reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reasons: vec![reason.into()],
        }
    }
}

impl TryFrom<SessionParts> for Session {
    type Error = InvalidSession;

    fn try_from(parts: SessionParts) -> Result<Self, Self::Error> {
        let session = Session {
            board: parts.board,
            status: parts.status,
            current: parts.current,
            history: parts.history,
        };
        SessionInvariants::check_all(&session).map_err(|violations| {
            warn!(count = violations.len(), "Rejecting deserialized session");
            InvalidSession {
                reasons: violations.into_iter().map(|v| v.description).collect(),
            }
        })?;
        Ok(session)
    }
}

impl Session {
    /// Creates a new session: empty board, X to move, one history entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::START,
            current: 0,
            history: HistoryLog::new(),
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the live status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Sequence number of the entry currently shown.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Returns the entry currently shown.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history.entries()[self.current]
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Applies a move for the player to move.
    ///
    /// Preconditions are checked in order: the game must not be over, then
    /// the cell must be empty. On success the history is truncated to the
    /// current entry before the new snapshot is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the status is terminal
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    #[instrument(skip(self), fields(current = self.current, status = ?self.status))]
    pub fn apply_move(&self, pos: Position) -> Result<Session, MoveError> {
        MoveContract::pre(self, &pos).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let player = self.status.to_move().ok_or(MoveError::GameOver)?;
        let board = self.board.with_mark(pos, player);

        let status = if let Some(won) = rules::evaluate(&board) {
            won
        } else if rules::is_full(&board) {
            GameStatus::Draw
        } else {
            GameStatus::ToMove(player.opponent())
        };

        let mut history = self.history.clone();
        let current = history.record(self.current, board, status);

        let next = Session {
            board,
            status,
            current,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        if status.is_terminal() {
            info!(?status, moves = current, "Game finished");
        } else {
            debug!(?player, position = %pos, move_number = current, "Move applied");
        }

        Ok(next)
    }

    /// Restores the entry with the given sequence number.
    ///
    /// No entries are removed: later entries stay in the log until a new
    /// move is made from here.
    ///
    /// # Errors
    ///
    /// [`SelectError`] if no entry has that sequence number.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn select_entry(&self, sequence: usize) -> Result<Session, SelectError> {
        let entry = self.history.select(sequence)?;
        debug!(status = ?entry.status(), "History entry selected");

        Ok(Session {
            board: *entry.board(),
            status: entry.status(),
            current: sequence,
            history: self.history.clone(),
        })
    }

    /// Returns true if an earlier entry exists.
    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    /// Returns true if a later entry is still stored.
    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.history.len()
    }

    /// Selects the previous entry, if any.
    pub fn undo(&self) -> Option<Session> {
        self.current
            .checked_sub(1)
            .and_then(|sequence| self.select_entry(sequence).ok())
    }

    /// Selects the next stored entry, if any.
    pub fn redo(&self) -> Option<Session> {
        self.select_entry(self.current + 1).ok()
    }

    /// Positions still open for the player to move.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Moves that led from the initial board to the current entry.
    pub fn moves(&self) -> Vec<Move> {
        self.history.entries()[..=self.current]
            .windows(2)
            .filter_map(|pair| {
                let (before, after) = (pair[0].board(), pair[1].board());
                Position::ALL.iter().find_map(|&pos| {
                    match (before.get(pos).player(), after.get(pos).player()) {
                        (None, Some(player)) => Some(Move::new(player, pos)),
                        _ => None,
                    }
                })
            })
            .collect()
    }

    /// Plays the given positions from a new session.
    ///
    /// # Errors
    ///
    /// The first rejection encountered.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Session, MoveError> {
        moves
            .iter()
            .try_fold(Session::new(), |session, &pos| session.apply_move(pos))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntryLabel, Player, Square};

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.status(), GameStatus::ToMove(Player::X));
        assert_eq!(session.current(), 0);
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_terminal());
    }

    #[test]
    fn test_apply_move_places_mark_and_records() {
        let session = Session::new();
        let next = session.apply_move(Position::Center).expect("legal move");

        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.status(), GameStatus::ToMove(Player::O));
        assert_eq!(next.current(), 1);
        assert_eq!(next.history().len(), 2);
        assert_eq!(next.current_entry().label(), EntryLabel::Move(1));

        // The original is untouched.
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let session = Session::new().apply_move(Position::TopLeft).expect("legal move");
        let err = session.apply_move(Position::TopLeft).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(Position::TopLeft));
        assert_eq!(session.current(), 1);
    }

    #[test]
    fn test_select_then_redo() {
        let session = Session::replay(&[Position::TopLeft, Position::Center]).expect("legal");
        let back = session.select_entry(1).expect("entry exists");

        assert_eq!(back.board().occupied_count(), 1);
        assert_eq!(back.status(), GameStatus::ToMove(Player::O));
        assert_eq!(back.history().len(), 3);
        assert!(back.can_redo());
        assert!(back.can_undo());

        let forward = back.redo().expect("entry 2 still stored");
        assert_eq!(forward.board(), session.board());
        assert!(!forward.can_redo());
    }

    #[test]
    fn test_undo_at_start() {
        assert!(Session::new().undo().is_none());
        assert!(Session::new().redo().is_none());
    }

    #[test]
    fn test_valid_moves() {
        let session = Session::replay(&[Position::TopLeft]).expect("legal");
        let moves = session.valid_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::TopLeft));

        let won = Session::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .expect("legal");
        assert!(won.valid_moves().is_empty());
    }

    #[test]
    fn test_moves_follow_current_entry() {
        let session = Session::replay(&[Position::TopLeft, Position::Center, Position::BottomRight])
            .expect("legal");
        assert_eq!(
            session.moves(),
            vec![
                Move::new(Player::X, Position::TopLeft),
                Move::new(Player::O, Position::Center),
                Move::new(Player::X, Position::BottomRight),
            ]
        );

        let back = session.select_entry(1).expect("entry exists");
        assert_eq!(back.moves(), vec![Move::new(Player::X, Position::TopLeft)]);
    }
}
