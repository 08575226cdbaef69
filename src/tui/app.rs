//! Application state and logic.

use crossterm::event::KeyEvent;
use tracing::{debug, instrument, warn};

use super::input::{Focus, KeyCommand, key_command, move_cursor};
use super::ui::Hit;
use crate::games::tictactoe::{Action, GameSession, MoveEntry, Position};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application around a fresh session.
    pub fn new(ascending: bool) -> Self {
        Self::with_session(GameSession::with_sort_order(ascending))
    }

    /// Creates an application around an existing session.
    pub fn with_session(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        };
        app.select_current();
        app
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move-list entries in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.session.move_list()
    }

    /// Handles a key press. Returns `true` when the app should quit.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(command) = key_command(self.focus, key.code) else {
            return false;
        };
        debug!(?command, "Key command");

        match command {
            KeyCommand::Quit => return true,
            KeyCommand::Game(action) => self.apply(action),
            KeyCommand::MoveCursor(code) => self.cursor = move_cursor(self.cursor, code),
            KeyCommand::PlaceAtCursor => self.apply(Action::Place(self.cursor)),
            KeyCommand::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            KeyCommand::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            KeyCommand::SelectNext => {
                let last = self.session.history().last_index();
                self.selected = (self.selected + 1).min(last);
            }
            KeyCommand::ActivateSelected => self.activate(self.selected),
            KeyCommand::StepBack => {
                let index = self.session.current_move().saturating_sub(1);
                self.apply(Action::JumpTo(index));
            }
            KeyCommand::StepForward => {
                let last = self.session.history().last_index();
                let index = (self.session.current_move() + 1).min(last);
                self.apply(Action::JumpTo(index));
            }
            KeyCommand::JumpToStart => self.apply(Action::JumpTo(0)),
            KeyCommand::JumpToLatest => {
                self.apply(Action::JumpTo(self.session.history().last_index()))
            }
        }
        false
    }

    /// Handles a mouse click on a screen element.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, hit: Hit) {
        match hit {
            Hit::Cell(pos) => {
                self.cursor = pos;
                self.focus = Focus::Board;
                self.apply(Action::Place(pos));
            }
            Hit::SortButton => self.apply(Action::ToggleSortOrder),
            Hit::MoveEntry(row) => {
                self.focus = Focus::Moves;
                self.activate(row);
            }
        }
    }

    /// Jumps to the entry shown at `row` of the move list.
    ///
    /// The entry for the current move is static text and ignores activation.
    fn activate(&mut self, row: usize) {
        let Some(entry) = self.move_list().into_iter().nth(row) else {
            return;
        };
        if *entry.is_current() {
            debug!(index = entry.index(), "Current entry is not activatable");
            self.selected = row;
            return;
        }
        self.apply(Action::JumpTo(*entry.index()));
    }

    /// Sends an action to the session and keeps the selection on the current move.
    fn apply(&mut self, action: Action) {
        match self.session.dispatch(action) {
            Ok(session) => {
                self.session = session;
                self.select_current();
            }
            Err(e) => warn!(error = %e, ?action, "Action rejected"),
        }
    }

    fn select_current(&mut self) {
        self.selected = self
            .move_list()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_number_keys_play() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session().history().len(), 3);
        assert_eq!(app.session().board_panel().status(), "Next player: X");
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_cursor_play() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session().current_record().location,
            Some(Position::TopLeft.location())
        );
    }

    #[test]
    fn test_step_keys_clamp() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.session().current_move(), 0);
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.session().current_move(), 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.session().current_move(), 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.session().current_move(), 1);
    }

    #[test]
    fn test_move_list_navigation_descending() {
        let mut app = App::new(false);
        for key in ['5', '1', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        // Newest first: the current move sits on row 0.
        assert_eq!(app.selected(), 0);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().current_move(), 1);
        assert_eq!(app.session().history().len(), 4);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_clicks() {
        let mut app = App::new(true);
        app.handle_click(Hit::Cell(Position::Center));
        app.handle_click(Hit::Cell(Position::Center));
        assert_eq!(app.session().history().len(), 2);

        app.handle_click(Hit::MoveEntry(0));
        assert_eq!(app.session().current_move(), 0);
        // Row 0 is now the current entry and ignores activation.
        app.handle_click(Hit::MoveEntry(0));
        assert_eq!(app.session().current_move(), 0);

        app.handle_click(Hit::SortButton);
        assert!(!app.session().is_ascending());
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('5'));
        assert!(!press(&mut app, KeyCode::Char('r')));
        assert_eq!(app.session().history().len(), 1);
        assert!(press(&mut app, KeyCode::Char('q')));
    }
}
