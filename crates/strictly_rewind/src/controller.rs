//! Boundary between the game logic and a presentation layer.
//!
//! A presentation layer sends [`Intent`]s and reads state back. Handling an
//! intent commits the new state first; any notification is held until the
//! presentation layer asks for it with [`Controller::take_notification`],
//! which it does after rendering the committed state.

use super::action::MoveError;
use super::history::{HistoryEntry, SelectError};
use super::{Board, GameStatus, Outcome, Position, Session};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// User intents accepted from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A history entry was clicked.
    HistoryEntryClicked(usize),
    /// The player asked for a new game.
    NewGameRequested,
}

/// User-visible notification produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Notification {
    /// An accepted move ended the game.
    #[display("{}", GameStatus::from(*_0))]
    GameOver(Outcome),
    /// A move was rejected.
    #[display("{}", _0)]
    Rejected(MoveError),
}

/// Owns the live session for a presentation layer.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    session: Session,
    pending: Option<Notification>,
}

impl Controller {
    /// Creates a controller with a new session.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one intent, committing the resulting state.
    ///
    /// Rejected moves are not errors here: they leave the session as it was
    /// and queue a [`Notification::Rejected`].
    ///
    /// # Errors
    ///
    /// [`SelectError`] when a history entry that does not exist is clicked.
    /// The session is left unchanged.
    #[instrument(skip(self), fields(current = self.session.current()))]
    pub fn handle(&mut self, intent: Intent) -> Result<(), SelectError> {
        match intent {
            Intent::CellClicked(pos) => match self.session.apply_move(pos) {
                Ok(next) => {
                    self.session = next;
                    if let Some(outcome) = self.session.status().outcome() {
                        info!(%outcome, "Queueing game over notification");
                        self.pending = Some(Notification::GameOver(outcome));
                    }
                }
                Err(e) => {
                    debug!(kind = ?e.kind(), "Queueing rejection notification");
                    self.pending = Some(Notification::Rejected(e));
                }
            },
            Intent::HistoryEntryClicked(sequence) => {
                self.session = self.session.select_entry(sequence).inspect_err(|e| {
                    warn!(error = %e, "Ignoring selection of unknown history entry");
                })?;
            }
            Intent::NewGameRequested => {
                info!("Starting new game");
                self.session = Session::new();
                self.pending = None;
            }
        }
        Ok(())
    }

    /// Takes the notification queued by the last transition, if any.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.pending.take()
    }

    /// Returns true if a notification is waiting.
    pub fn has_notification(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the live session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Returns the live status.
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Returns the status text for display.
    pub fn status_text(&self) -> String {
        self.session.status().to_string()
    }

    /// Returns the history entries in order.
    pub fn history(&self) -> &[HistoryEntry] {
        self.session.history().entries()
    }

    /// Sequence number of the entry currently shown.
    pub fn current(&self) -> usize {
        self.session.current()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.session.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn click(controller: &mut Controller, id: u8) {
        let pos = Position::from_id(id).expect("valid id");
        controller.handle(Intent::CellClicked(pos)).expect("cell clicks never fail");
    }

    #[test]
    fn test_win_queues_notification_after_commit() {
        let mut controller = Controller::new();
        for id in [1, 2, 4, 3] {
            click(&mut controller, id);
            assert!(!controller.has_notification());
        }
        click(&mut controller, 7);

        // State is already committed when the notification is read.
        assert_eq!(controller.status(), GameStatus::Won(Player::X));
        let notice = controller.take_notification().expect("game over notice");
        assert_eq!(notice, Notification::GameOver(Outcome::Winner(Player::X)));
        assert_eq!(notice.to_string(), "Winner: X");
        assert!(controller.take_notification().is_none());
    }

    #[test]
    fn test_draw_queues_notification() {
        let mut controller = Controller::new();
        for id in [1, 2, 3, 5, 4, 6, 8, 7] {
            click(&mut controller, id);
        }
        assert!(!controller.has_notification());
        click(&mut controller, 9);

        let Some(Notification::GameOver(outcome)) = controller.take_notification() else {
            panic!("expected a game over notice");
        };
        assert!(outcome.is_draw());
        assert_eq!(outcome.winner(), None);
        assert_eq!(Notification::GameOver(outcome).to_string(), "Draw");
    }

    #[test]
    fn test_rejection_notification() {
        let mut controller = Controller::new();
        click(&mut controller, 1);
        click(&mut controller, 1);

        assert_eq!(controller.current(), 1);
        assert_eq!(
            controller.take_notification().map(|n| n.to_string()),
            Some("Cell 1 (Top-left) is already occupied".to_string())
        );
    }

    #[test]
    fn test_unknown_history_entry() {
        let mut controller = Controller::new();
        let err = controller.handle(Intent::HistoryEntryClicked(2)).unwrap_err();
        assert_eq!(err, SelectError { requested: 2, len: 1 });
        assert_eq!(controller.session(), &Session::new());
    }

    #[test]
    fn test_new_game_resets_and_clears_pending() {
        let mut controller = Controller::new();
        click(&mut controller, 5);
        click(&mut controller, 5);
        assert!(controller.has_notification());

        controller.handle(Intent::NewGameRequested).expect("new game");
        assert!(!controller.has_notification());
        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.status_text(), "Next player: X");
    }
}
