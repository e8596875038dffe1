//! Strictly Rewind - tic-tac-toe with time travel
//!
//! Pure game logic: no I/O, no global state. A [`Session`] is a value and
//! every transition returns a new one.
//!
//! # Architecture
//!
//! - **Board**: 9 cells identified 1-9 ([`Board`], [`Position`])
//! - **Rules**: win and draw detection ([`rules`])
//! - **Session**: move engine and history selection ([`Session`])
//! - **History**: linear log with truncate-on-branch ([`HistoryLog`])
//! - **Controller**: intents in, state and notifications out ([`Controller`])
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameStatus, Player, Position, Session};
//!
//! let session = Session::new()
//!     .apply_move(Position::Center)
//!     .and_then(|s| s.apply_move(Position::TopLeft))?;
//! assert_eq!(session.status(), GameStatus::ToMove(Player::X));
//!
//! // Jump back to the start; later entries stay selectable.
//! let start = session.select_entry(0).expect("entry 0 always exists");
//! assert_eq!(start.board().occupied_count(), 0);
//! assert_eq!(start.history().len(), 3);
//! # Ok::<(), strictly_rewind::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod status;
mod types;

pub use action::{Move, MoveError, MoveErrorKind};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use controller::{Controller, Intent, Notification};
pub use history::{EntryLabel, HistoryEntry, HistoryLog, SelectError};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
pub use position::{InvalidPosition, Position};
pub use session::{InvalidSession, Session};
pub use status::{GameStatus, Outcome};
pub use types::{Board, Cell, Player, Square};
