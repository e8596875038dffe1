//! Game status and final outcomes.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// Exactly one variant holds at any time. `Won` and `Draw` are terminal:
/// no further moves are accepted from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and the given player moves next.
    ToMove(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Status at the start of every game.
    pub const START: GameStatus = GameStatus::ToMove(Player::X);

    /// Returns true if no further moves are legal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::ToMove(_))
    }

    /// Returns the player to move, if the game is ongoing.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameStatus::ToMove(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns the outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::ToMove(_) => None,
            GameStatus::Won(player) => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::ToMove(player) => write!(f, "Next player: {}", player),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::ToMove(Player::X).is_terminal());
        assert!(!GameStatus::ToMove(Player::O).is_terminal());
        assert!(GameStatus::Won(Player::X).is_terminal());
        assert!(GameStatus::Won(Player::O).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn test_outcome_round_trips_through_status() {
        for outcome in [Outcome::Winner(Player::X), Outcome::Winner(Player::O), Outcome::Draw] {
            assert_eq!(GameStatus::from(outcome).outcome(), Some(outcome));
        }
        assert_eq!(GameStatus::START.outcome(), None);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::ToMove(Player::O).to_string(), "Next player: O");
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }
}
