//! Non-interactive replay of scripted clicks.
//!
//! Builds a session the same way the terminal UI does (one click per cell,
//! illegal clicks ignored), then renders it as plain text or JSON.

use derive_more::{Display, From};
use serde::Serialize;
use tracing::{info, instrument};

use crate::games::tictactoe::{GameSession, MoveEntry, Position, SessionError};

/// Error building a replay.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ReplayError {
    /// A move was not a cell number between 1 and 9.
    #[display("Invalid cell {:?}: expected a number from 1 to 9", _0)]
    #[from(skip)]
    InvalidCell(String),

    /// The session refused a transition.
    #[display("{}", _0)]
    Session(SessionError),
}

impl std::error::Error for ReplayError {}

/// Parses cell numbers (1-9, row-major) into positions.
#[instrument]
pub fn parse_moves(raw: &[String]) -> Result<Vec<Position>, ReplayError> {
    raw.iter()
        .map(|cell| {
            Position::from_cell_number(cell).ok_or_else(|| ReplayError::InvalidCell(cell.clone()))
        })
        .collect()
}

/// Clicks each position in turn, then optionally jumps and sets the list order.
#[instrument]
pub fn replay(
    moves: &[Position],
    jump: Option<usize>,
    descending: bool,
) -> Result<GameSession, ReplayError> {
    let session = moves
        .iter()
        .fold(GameSession::with_sort_order(!descending), |s, pos| {
            s.click(*pos)
        });
    let session = match jump {
        Some(index) => session.jump_to(index)?,
        None => session,
    };
    info!(
        history_len = session.history().len(),
        current_move = session.current_move(),
        "Replay finished"
    );
    Ok(session)
}

/// Plain-text rendering: board, status, sort label and move list.
///
/// The current entry is marked with `>`.
pub fn render_text(session: &GameSession) -> String {
    let panel = session.board_panel();
    let mut out = format!("{}\n\n{}\n", panel.board(), panel.status());
    if let Some(victory) = panel.victory() {
        let [a, b, c] = victory.indices();
        out.push_str(&format!("Winning line: {a}, {b}, {c}\n"));
    }
    out.push_str(&format!("[{}]\n", session.sort_button_label()));
    for entry in session.move_list() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.label()));
    }
    out
}

/// Serializable snapshot of a session with its derived views.
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    /// Status line.
    pub status: String,
    /// Whether X places the next mark.
    pub x_is_next: bool,
    /// Winning triple as board indices.
    pub winning_line: Option<[usize; 3]>,
    /// Label of the sort control.
    pub sort_button: &'static str,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// The full session state.
    pub session: &'a GameSession,
}

impl<'a> SessionReport<'a> {
    /// Collects the derived views of `session`.
    pub fn new(session: &'a GameSession) -> Self {
        let panel = session.board_panel();
        Self {
            status: panel.status(),
            x_is_next: session.x_is_next(),
            winning_line: panel.victory().map(|v| v.indices()),
            sort_button: session.sort_button_label(),
            moves: session.move_list(),
            session,
        }
    }
}
