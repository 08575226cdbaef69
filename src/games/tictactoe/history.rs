//! Ordered record of board snapshots.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::{Play, SessionError};
use super::{Board, Location};

/// One history entry: a snapshot and the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board after this move.
    pub board: Board,
    /// Cell that produced the snapshot; `None` for the starting board.
    pub location: Option<Location>,
}

impl MoveRecord {
    /// The starting record: empty board, no location.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }
}

impl From<Play> for MoveRecord {
    fn from(play: Play) -> Self {
        Self {
            board: play.board,
            location: Some(play.location),
        }
    }
}

/// History of a game; index 0 is always the empty starting board.
///
/// Deserialization rejects record lists that break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct History {
    records: Vec<MoveRecord>,
}

#[derive(Deserialize)]
struct StoredHistory {
    records: Vec<MoveRecord>,
}

impl TryFrom<StoredHistory> for History {
    type Error = SessionError;

    fn try_from(stored: StoredHistory) -> Result<Self, Self::Error> {
        match stored.records.first() {
            None => Err(SessionError::EmptyHistory),
            Some(first) if *first != MoveRecord::start() => Err(SessionError::MissingStart),
            Some(_) => Ok(Self {
                records: stored.records,
            }),
        }
    }
}

impl History {
    /// Creates a history holding only the starting record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Number of records, including the start.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; the starting record cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// All records in order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Index of the last record.
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// Returns a new history with every record after `index` discarded and
    /// `record` appended.
    #[instrument(skip(self, record), fields(len = self.records.len()))]
    pub fn branch(&self, index: usize, record: MoveRecord) -> Self {
        let keep = (index + 1).min(self.records.len());
        if keep < self.records.len() {
            debug!(
                discarded = self.records.len() - keep,
                "Discarding abandoned future"
            );
        }
        let mut records = Vec::with_capacity(keep + 1);
        records.extend_from_slice(&self.records[..keep]);
        records.push(record);
        Self { records }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
