//! Moves and move rejections.
//!
//! A move is a domain event: the player to move placing their mark on an
//! empty cell. Rejections are values classified by kind so the
//! presentation layer can decide how to surface them.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("The game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// An invariant was violated (postcondition failure, debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Classification of a [`MoveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveErrorKind {
    /// Move attempted after a terminal state was reached.
    GameOver,
    /// Move attempted on a non-empty cell.
    CellOccupied,
    /// Internal consistency failure.
    InvariantViolation,
}

impl MoveError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> MoveErrorKind {
        match self {
            MoveError::GameOver => MoveErrorKind::GameOver,
            MoveError::CellOccupied(_) => MoveErrorKind::CellOccupied,
            MoveError::InvariantViolation(_) => MoveErrorKind::InvariantViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "The game is already over");
        assert_eq!(
            MoveError::CellOccupied(Position::TopLeft).to_string(),
            "Cell 1 (Top-left) is already occupied"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(MoveError::GameOver.kind(), MoveErrorKind::GameOver);
        assert_eq!(
            MoveError::CellOccupied(Position::Center).kind(),
            MoveErrorKind::CellOccupied
        );
    }

    #[test]
    fn test_move_display() {
        assert_eq!(
            Move::new(Player::O, Position::BottomRight).to_string(),
            "O -> 9 (Bottom-right)"
        );
    }
}
