//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use super::action::MoveError;
use super::position::Position;

/// Player in the game, doubling as the mark they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player to move given whether X is next.
    pub fn to_move(x_is_next: bool) -> Self {
        if x_is_next { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(p) => Some(p),
        }
    }

    /// Single-character form used by the text board format.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of the board with `player`'s mark at `pos`.
    ///
    /// The receiver is left untouched, so earlier snapshots stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(board = %self))]
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        Ok(next)
    }

    /// Positions whose squares are still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in chunk {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character other than `X`, `O` or `.` was found.
    #[display("Invalid board character {:?}", _0)]
    InvalidChar(char),

    /// The board did not have exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine `X`/`O`/`.` characters in row-major order. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::X)),
                'O' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self::from_squares(squares))
    }
}
