//! Tic-tac-toe with move history and time travel.

pub mod action;
pub mod board;
pub mod history;
pub mod position;
pub mod rules;
pub mod session;
pub mod types;

pub use action::{Action, MoveError, Play, SessionError};
pub use board::BoardPanel;
pub use history::{History, MoveRecord};
pub use position::{Location, Position};
pub use rules::{LINES, Victory, calculate_winner, is_draw, is_full};
pub use session::{GameSession, MoveEntry};
pub use types::{Board, BoardParseError, Player, Square};
