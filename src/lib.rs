//! Time-travel tic-tac-toe library
//!
//! A tic-tac-toe game that records every position, lets players jump back to
//! any earlier one, and branches the history when a new move is made from the
//! past.
//!
//! # Architecture
//!
//! - **Games**: pure game logic (rules, board panel, history, session)
//! - **TUI**: ratatui front end driving a [`GameSession`]
//! - **Replay**: scripted, non-interactive sessions rendered as text or JSON
//!
//! # Example
//!
//! ```
//! use tictactoe_timetravel::{GameSession, Position};
//!
//! let session = GameSession::new()
//!     .click(Position::Center)
//!     .click(Position::TopLeft);
//! assert_eq!(session.board_panel().status(), "Next player: X");
//!
//! // Travel back and branch: the old future is discarded.
//! let branched = session.jump_to(1)?.click(Position::BottomRight);
//! assert_eq!(branched.history().len(), 3);
//! # Ok::<(), tictactoe_timetravel::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Replay
pub use replay::{ReplayError, SessionReport, parse_moves, render_text, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardPanel, BoardParseError, GameSession, History, LINES, Location, MoveEntry,
    MoveError, MoveRecord, Play, Player, Position, SessionError, Square, Victory,
    calculate_winner, is_draw, is_full,
};
