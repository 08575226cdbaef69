//! The board panel: status line, winning highlight and click handling for a
//! single snapshot.
//!
//! A panel is a pure value built from a board and whose turn it is. It holds
//! no state of its own; a legal click is reported back as a [`Play`] and the
//! caller decides what to do with it.

use tracing::{debug, instrument};

use super::action::{MoveError, Play};
use super::rules::{Victory, calculate_winner, is_full};
use super::{Board, Player, Position, Square};

/// View of one board snapshot with the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPanel {
    board: Board,
    x_is_next: bool,
    victory: Option<Victory>,
}

impl BoardPanel {
    /// Creates a panel for `board` with the given turn.
    #[instrument(skip(board))]
    pub fn new(board: Board, x_is_next: bool) -> Self {
        Self {
            board,
            x_is_next,
            victory: calculate_winner(&board),
        }
    }

    /// The displayed snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who would place the next mark.
    pub fn to_move(&self) -> Player {
        Player::to_move(self.x_is_next)
    }

    /// The completed line, if any.
    pub fn victory(&self) -> Option<&Victory> {
        self.victory.as_ref()
    }

    /// Whether every square is filled and nobody won.
    pub fn is_draw(&self) -> bool {
        self.victory.is_none() && is_full(&self.board)
    }

    /// Status line shown above the board.
    pub fn status(&self) -> String {
        if let Some(victory) = &self.victory {
            format!("Winner: {}", victory.winner)
        } else if is_full(&self.board) {
            "Draw".to_string()
        } else {
            format!("Next player: {}", self.to_move())
        }
    }

    /// Whether `pos` is part of the winning line and should be highlighted.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.victory.is_some_and(|v| v.contains(pos))
    }

    /// Square at `pos`.
    pub fn value(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Validates a click on `pos` and computes the resulting play.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once a line is complete, and
    /// [`MoveError::SquareOccupied`] for a filled square.
    pub fn try_click(&self, pos: Position) -> Result<Play, MoveError> {
        if self.victory.is_some() {
            return Err(MoveError::GameOver);
        }
        let next = self.board.place(pos, self.to_move())?;
        Ok(Play::new(next, pos.location()))
    }

    /// Handles a click on `pos`.
    ///
    /// Illegal clicks are silently ignored and yield `None`.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn click(&self, pos: Position) -> Option<Play> {
        match self.try_click(pos) {
            Ok(play) => Some(play),
            Err(e) => {
                debug!(reason = %e, "Ignoring click");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Location;

    #[test]
    fn test_status_next_player() {
        let panel = BoardPanel::new(Board::new(), true);
        assert_eq!(panel.status(), "Next player: X");
        let panel = BoardPanel::new("X........".parse().unwrap(), false);
        assert_eq!(panel.status(), "Next player: O");
    }

    #[test]
    fn test_status_winner_and_highlight() {
        let panel = BoardPanel::new("OOO XX. X..".parse().unwrap(), true);
        assert_eq!(panel.status(), "Winner: O");
        assert!(panel.is_winning_square(Position::TopRight));
        assert!(!panel.is_winning_square(Position::Center));
        assert!(!panel.is_draw());
    }

    #[test]
    fn test_status_draw() {
        let panel = BoardPanel::new("XOX OXX OXO".parse().unwrap(), false);
        assert_eq!(panel.status(), "Draw");
        assert!(panel.is_draw());
        assert!(Position::in_order().all(|p| !panel.is_winning_square(p)));
    }

    #[test]
    fn test_click_reports_board_and_location() {
        let panel = BoardPanel::new("X........".parse().unwrap(), false);
        let play = panel.click(Position::MiddleRight).unwrap();
        assert_eq!(play.location, Location::new(1, 2));
        assert_eq!(play.board.to_string(), "X..\n..O\n...");
    }

    #[test]
    fn test_click_changes_only_target_square() {
        let board: Board = "X.O .X. ...".parse().unwrap();
        let panel = BoardPanel::new(board, false);
        for pos in board.empty_positions() {
            let play = panel.click(pos).unwrap();
            for other in Position::in_order() {
                if other == pos {
                    assert_eq!(play.board.get(other), Square::Occupied(Player::O));
                } else {
                    assert_eq!(play.board.get(other), board.get(other));
                }
            }
        }
    }

    #[test]
    fn test_click_on_occupied_square_is_ignored() {
        let panel = BoardPanel::new("X........".parse().unwrap(), false);
        assert_eq!(panel.click(Position::TopLeft), None);
        assert_eq!(
            panel.try_click(Position::TopLeft),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let panel = BoardPanel::new("XXX OO. ...".parse().unwrap(), false);
        for pos in Position::in_order() {
            assert_eq!(panel.click(pos), None);
        }
        assert_eq!(panel.try_click(Position::Center), Err(MoveError::GameOver));
    }
}
