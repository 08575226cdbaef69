//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    /// The player owning the line.
    pub winner: Player,
    /// The winning triple.
    pub line: [Position; 3],
}

impl Victory {
    /// Board indices of the winning triple.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose three squares hold the same
/// mark, or `None` when no line is complete.
#[instrument(skip(board), fields(board = %board))]
pub fn calculate_winner(board: &Board) -> Option<Victory> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Some(winner) = sq.player()
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(Victory { winner, line });
        }
    }

    None
}
