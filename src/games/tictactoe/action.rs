//! First-class action types for tic-tac-toe.
//!
//! Every user interaction is turned into an [`Action`] before it reaches the
//! session, and a legal click on the board is reported upward as a [`Play`].

use super::{Board, Location, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// What the board reports upward after a legal click: the next snapshot and
/// the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Play {
    /// Board after the mark was placed.
    pub board: Board,
    /// Row and column of the clicked cell.
    pub location: Location,
}

/// A semantic user intent, independent of how it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate a board cell.
    Place(Position),
    /// Show the snapshot at the given history index.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ToggleSortOrder,
    /// Start a new game.
    Restart,
}

/// Reason a board refused a mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error returned by session transitions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A jump targeted an index past the end of the history.
    #[display("Move #{} does not exist (history has {} entries)", index, len)]
    MoveOutOfRange {
        /// Requested history index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A stored history had no records.
    #[display("History has no records")]
    EmptyHistory,

    /// A stored history did not begin with the empty starting board.
    #[display("History does not begin at the empty starting board")]
    MissingStart,
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            SessionError::MoveOutOfRange { index: 4, len: 2 }.to_string(),
            "Move #4 does not exist (history has 2 entries)"
        );
        assert_eq!(SessionError::EmptyHistory.to_string(), "History has no records");
    }
}
