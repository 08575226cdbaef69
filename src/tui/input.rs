//! Key mapping and cursor movement for keyboard navigation.

use crate::games::tictactoe::{Action, Position};
use crossterm::event::KeyCode;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Leave the application.
    Quit,
    /// A game action that goes straight to the session.
    Game(Action),
    /// Move the board cursor in the direction of the arrow key.
    MoveCursor(KeyCode),
    /// Place a mark at the board cursor.
    PlaceAtCursor,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Select the previous move-list entry.
    SelectPrevious,
    /// Select the next move-list entry.
    SelectNext,
    /// Jump to the selected move-list entry.
    ActivateSelected,
    /// Show the snapshot one move earlier.
    StepBack,
    /// Show the snapshot one move later.
    StepForward,
    /// Show the starting board.
    JumpToStart,
    /// Show the latest snapshot.
    JumpToLatest,
}

/// Maps a key to a command given the focused pane.
pub fn key_command(focus: Focus, key: KeyCode) -> Option<KeyCommand> {
    let command = match (focus, key) {
        (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => KeyCommand::Quit,
        (_, KeyCode::Char('s') | KeyCode::Char('S')) => {
            KeyCommand::Game(Action::ToggleSortOrder)
        }
        (_, KeyCode::Char('r') | KeyCode::Char('R')) => KeyCommand::Game(Action::Restart),
        (_, KeyCode::Tab | KeyCode::BackTab) => KeyCommand::SwitchFocus,
        (_, KeyCode::Char('[')) => KeyCommand::StepBack,
        (_, KeyCode::Char(']')) => KeyCommand::StepForward,
        (_, KeyCode::Home) => KeyCommand::JumpToStart,
        (_, KeyCode::End) => KeyCommand::JumpToLatest,
        (_, KeyCode::Char(c @ '1'..='9')) => {
            let pos = Position::from_cell_number(&c.to_string())?;
            KeyCommand::Game(Action::Place(pos))
        }

        (Focus::Board, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            KeyCommand::MoveCursor(key)
        }
        (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => KeyCommand::PlaceAtCursor,

        (Focus::Moves, KeyCode::Up | KeyCode::Char('k')) => KeyCommand::SelectPrevious,
        (Focus::Moves, KeyCode::Down | KeyCode::Char('j')) => KeyCommand::SelectNext,
        (Focus::Moves, KeyCode::Enter | KeyCode::Char(' ')) => KeyCommand::ActivateSelected,

        _ => return None,
    };
    Some(command)
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // No change for other keys or edge cases
        _ => cursor,
    }
}
