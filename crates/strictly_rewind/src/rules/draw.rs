//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X)
            .with_mark(Position::MiddleLeft, Player::O)
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::MiddleRight, Player::X)
            .with_mark(Position::BottomLeft, Player::O)
            .with_mark(Position::BottomCenter, Player::X)
            .with_mark(Position::BottomRight, Player::O);

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X)
            .with_mark(Position::MiddleLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::MiddleRight, Player::X)
            .with_mark(Position::BottomLeft, Player::X)
            .with_mark(Position::BottomCenter, Player::O)
            .with_mark(Position::BottomRight, Player::O);

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
