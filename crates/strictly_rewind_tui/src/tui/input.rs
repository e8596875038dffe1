//! Keyboard mapping.

use crossterm::event::KeyCode;
use strictly_rewind::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The history list.
    History,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Click the cell under the board cursor.
    ClickCursor,
    /// Click a cell directly.
    ClickCell(Position),
    /// Move the history cursor up.
    HistoryUp,
    /// Move the history cursor down.
    HistoryDown,
    /// Click the history entry under the history cursor.
    SelectHistory,
    /// Select the previous history entry.
    Undo,
    /// Select the next stored history entry.
    Redo,
    /// Switch focus between board and history.
    ToggleFocus,
    /// Start a new game.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action for the focused pane.
pub fn action_for(focus: Focus, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('r') => Some(Action::Redo),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(|d| Position::from_id(d as u8))
            .map(Action::ClickCell),
        _ => match focus {
            Focus::Board => match key {
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    Some(Action::MoveCursor(key))
                }
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ClickCursor),
                _ => None,
            },
            Focus::History => match key {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::HistoryUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::HistoryDown),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectHistory),
                _ => None,
            },
        },
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
