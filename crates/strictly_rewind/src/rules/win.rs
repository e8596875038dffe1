//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
fn first_completed(board: &Board) -> Option<([Position; 3], Player)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((line, player))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    first_completed(board).map(|(_, player)| player)
}

/// Returns the first completed line, for highlighting.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    first_completed(board).map(|(line, _)| line)
}

/// Evaluates the board for a win.
///
/// Returns the terminal win status, or `None` when no line is complete
/// (the game may still be ongoing or drawn).
#[instrument]
pub fn evaluate(board: &Board) -> Option<GameStatus> {
    check_winner(board).map(GameStatus::Won)
}
