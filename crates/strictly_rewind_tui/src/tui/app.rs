//! Application state and logic.

use super::input::{Action, Focus, move_cursor};
use crate::config::DisplayConfig;
use crossterm::event::KeyCode;
use strictly_rewind::{Controller, Intent, Notification, Position};
use tracing::{debug, error, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    display: DisplayConfig,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    popup: Option<Notification>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            controller: Controller::new(),
            display,
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            popup: None,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Gets the display options.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Cell under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History entry under the history cursor.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Notification currently shown, if any.
    pub fn popup(&self) -> Option<&Notification> {
        self.popup.as_ref()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Second phase of a transition: surfaces the pending notification.
    ///
    /// Called after the committed state has been drawn. Returns true if a
    /// popup was raised and the screen needs another draw.
    pub fn after_render(&mut self) -> bool {
        if self.popup.is_some() {
            return false;
        }
        self.popup = self.controller.take_notification();
        self.popup.is_some()
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn on_key(&mut self, key: KeyCode) {
        if self.popup.take().is_some() {
            debug!("Popup dismissed");
            return;
        }

        if let Some(action) = super::input::action_for(self.focus, key) {
            self.apply(action);
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        let session = self.controller.session();
        let intent = match action {
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            Action::ClickCursor => Some(Intent::CellClicked(self.cursor)),
            Action::ClickCell(pos) => {
                self.cursor = pos;
                Some(Intent::CellClicked(pos))
            }
            Action::HistoryUp => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
                None
            }
            Action::HistoryDown => {
                let last = session.history().len() - 1;
                self.history_cursor = (self.history_cursor + 1).min(last);
                None
            }
            Action::SelectHistory => Some(Intent::HistoryEntryClicked(self.history_cursor)),
            Action::Undo => session
                .can_undo()
                .then(|| Intent::HistoryEntryClicked(session.current() - 1)),
            Action::Redo => session
                .can_redo()
                .then(|| Intent::HistoryEntryClicked(session.current() + 1)),
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                None
            }
            Action::NewGame => Some(Intent::NewGameRequested),
            Action::Quit => {
                self.should_quit = true;
                None
            }
        };

        if let Some(intent) = intent {
            self.dispatch(intent);
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        if let Err(e) = self.controller.handle(intent) {
            // Only offered entries are selectable, so this is a bug.
            error!(error = %e, ?intent, "Intent failed");
        }
        self.history_cursor = self.controller.current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_rewind::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.on_key(key);
            app.after_render();
        }
    }

    #[test]
    fn test_cursor_click_places_mark() {
        let mut app = App::new(DisplayConfig::default());
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.controller().current(), 1);
        assert_eq!(app.history_cursor(), 1);
    }

    #[test]
    fn test_rejection_raises_popup_and_any_key_dismisses() {
        let mut app = App::new(DisplayConfig::default());
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);

        assert!(app.popup().is_some());
        assert_eq!(app.controller().current(), 1);

        // The dismissing key is swallowed.
        press(&mut app, &[KeyCode::Char('1')]);
        assert!(app.popup().is_none());
        assert_eq!(app.controller().current(), 1);
    }

    #[test]
    fn test_popup_waits_for_render() {
        let mut app = App::new(DisplayConfig::default());
        for key in ['1', '2', '4', '3', '7'] {
            app.on_key(KeyCode::Char(key));
            if key != '7' {
                app.after_render();
            }
        }

        assert_eq!(app.controller().status(), GameStatus::Won(Player::X));
        assert!(app.popup().is_none());
        assert!(app.after_render());
        assert_eq!(app.popup().map(|n| n.to_string()), Some("Winner: X".to_string()));
    }

    #[test]
    fn test_history_navigation_and_undo_redo() {
        let mut app = App::new(DisplayConfig::default());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')]);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.controller().current(), 1);
        assert_eq!(app.controller().history().len(), 4);

        press(&mut app, &[KeyCode::Char('u')]);
        assert_eq!(app.controller().current(), 0);
        press(&mut app, &[KeyCode::Char('u')]);
        assert_eq!(app.controller().current(), 0);

        press(&mut app, &[KeyCode::Char('r'), KeyCode::Char('r')]);
        assert_eq!(app.controller().current(), 2);
    }

    #[test]
    fn test_new_game_and_quit() {
        let mut app = App::new(DisplayConfig::default());
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('n')]);
        assert_eq!(app.controller().history().len(), 1);

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
