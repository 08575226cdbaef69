//! Game session: history, current move and move-list ordering.
//!
//! [`GameSession`] is a plain value. Every transition borrows the current
//! session and returns the next one, so callers own the state and tests need
//! no rendering harness.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::action::{Action, Play, SessionError};
use super::board::BoardPanel;
use super::history::{History, MoveRecord};
use super::{Board, Location, Position};

/// Complete state of one game session.
///
/// `current_move` always indexes into `history`, including after
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSession")]
pub struct GameSession {
    history: History,
    current_move: usize,
    ascending: bool,
}

#[derive(Deserialize)]
struct StoredSession {
    history: History,
    current_move: usize,
    ascending: bool,
}

impl TryFrom<StoredSession> for GameSession {
    type Error = SessionError;

    fn try_from(stored: StoredSession) -> Result<Self, Self::Error> {
        let session = Self {
            history: stored.history,
            current_move: 0,
            ascending: stored.ascending,
        };
        session.jump_to(stored.current_move)
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History index this entry points at.
    index: usize,
    /// Cell that produced the snapshot, `None` for the start.
    location: Option<Location>,
    /// Whether this is the displayed snapshot. Current entries are not
    /// activatable.
    is_current: bool,
    /// Display text.
    label: String,
}

impl MoveEntry {
    #[instrument(skip(location))]
    fn new(index: usize, location: Option<Location>, is_current: bool) -> Self {
        let label = match (is_current, index, location) {
            // The start has no cell, so it is named rather than shown as an
            // empty "(, )" pair.
            (true, 0, _) => "You are at game start".to_string(),
            (true, k, Some(loc)) => format!("You are at move #{k} {loc}"),
            (false, 0, _) => "Go to game start".to_string(),
            (false, k, Some(loc)) => format!("Go to move #{k} {loc}"),
            // Only the start record lacks a location.
            (true, k, None) => format!("You are at move #{k}"),
            (false, k, None) => format!("Go to move #{k}"),
        };
        Self {
            index,
            location,
            is_current,
            label,
        }
    }
}

impl GameSession {
    /// Creates a session at the empty starting board with the list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(true)
    }

    /// Creates a fresh session with the given move-list order.
    #[instrument]
    pub fn with_sort_order(ascending: bool) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            ascending,
        }
    }

    /// All snapshots recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Whether the move list is shown in natural order.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// X moves on even positions, O on odd ones.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The displayed record.
    pub fn current_record(&self) -> &MoveRecord {
        &self.history.records()[self.current_move]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.current_record().board
    }

    /// Board panel for the displayed snapshot.
    pub fn board_panel(&self) -> BoardPanel {
        BoardPanel::new(*self.current_board(), self.x_is_next())
    }

    /// Records `play` after the current move.
    ///
    /// Any records beyond the current move are discarded first, then the
    /// current move advances to the new last record.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&self, play: Play) -> Self {
        let history = self.history.branch(self.current_move, play.into());
        let current_move = history.last_index();
        debug!(current_move, location = %play.location, "Move applied");
        Self {
            history,
            current_move,
            ascending: self.ascending,
        }
    }

    /// Routes a click on `pos` through the board panel.
    ///
    /// An illegal click returns an unchanged session.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn click(&self, pos: Position) -> Self {
        match self.board_panel().click(pos) {
            Some(play) => self.apply_move(play),
            None => self.clone(),
        }
    }

    /// Displays the snapshot at `index` without touching the history.
    ///
    /// Jumping to the current move is allowed and changes nothing.
    ///
    /// # Errors
    ///
    /// [`SessionError::MoveOutOfRange`] if `index` is past the last record.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, index: usize) -> Result<Self, SessionError> {
        if index >= self.history.len() {
            return Err(SessionError::MoveOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = index, "Jumping");
        Ok(Self {
            history: self.history.clone(),
            current_move: index,
            ascending: self.ascending,
        })
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self.clone()
        }
    }

    /// Starts over with an empty board, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        info!("Restarting game");
        Self::with_sort_order(self.ascending)
    }

    /// Applies a user action.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from [`GameSession::jump_to`].
    #[instrument(skip(self))]
    pub fn dispatch(&self, action: Action) -> Result<Self, SessionError> {
        match action {
            Action::Place(pos) => Ok(self.click(pos)),
            Action::JumpTo(index) => self.jump_to(index),
            Action::ToggleSortOrder => Ok(self.toggle_sort_order()),
            Action::Restart => Ok(self.restart()),
        }
    }

    /// Move-list entries in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entry = |(index, record): (usize, &MoveRecord)| {
            MoveEntry::new(index, record.location, index == self.current_move)
        };
        let records = self.history.records().iter().enumerate();
        if self.ascending {
            records.map(entry).collect()
        } else {
            records.rev().map(entry).collect()
        }
    }

    /// Label of the control that flips the move-list order.
    pub fn sort_button_label(&self) -> &'static str {
        if self.ascending {
            "Sort Descending"
        } else {
            "Sort Ascending"
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
