//! Linear move history with time travel.
//!
//! The log holds one snapshot per accepted move plus the initial empty
//! board. Recording a move from an earlier point discards every entry
//! after that point before appending, so the log never branches.

use super::session::InvalidSession;
use super::{Board, GameStatus, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display label of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryLabel {
    /// The initial empty board.
    GameStart,
    /// A move that left the game ongoing (1-based move number).
    Move(usize),
    /// The move that ended the game.
    GameOver {
        /// 1-based move number.
        move_number: usize,
        /// How the game ended.
        outcome: Outcome,
    },
}

impl EntryLabel {
    /// Chooses the label for the entry with the given sequence number and status.
    pub fn for_entry(sequence: usize, status: GameStatus) -> Self {
        match (sequence, status.outcome()) {
            (0, _) => EntryLabel::GameStart,
            (n, Some(outcome)) => EntryLabel::GameOver {
                move_number: n,
                outcome,
            },
            (n, None) => EntryLabel::Move(n),
        }
    }
}

impl std::fmt::Display for EntryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryLabel::GameStart => write!(f, "Go to game start"),
            EntryLabel::Move(n) => write!(f, "Go to move #{}", n),
            EntryLabel::GameOver { outcome, .. } => write!(f, "Go to game over ({})", outcome),
        }
    }
}

/// Snapshot of the game after a given number of moves.
///
/// The label is derived on deserialization; a stored label is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryParts")]
pub struct HistoryEntry {
    sequence: usize,
    board: Board,
    status: GameStatus,
    label: EntryLabel,
}

impl HistoryEntry {
    fn new(sequence: usize, board: Board, status: GameStatus) -> Self {
        Self {
            sequence,
            board,
            status,
            label: EntryLabel::for_entry(sequence, status),
        }
    }

    /// Number of moves made to reach this entry (0 = initial board).
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Board at this point.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status at this point.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Display label.
    pub fn label(&self) -> EntryLabel {
        self.label
    }
}

#[derive(Deserialize)]
struct EntryParts {
    sequence: usize,
    board: Board,
    status: GameStatus,
}

impl From<EntryParts> for HistoryEntry {
    fn from(parts: EntryParts) -> Self {
        Self::new(parts.sequence, parts.board, parts.status)
    }
}

/// Selection of a sequence number that is not in the log.
///
/// The presentation layer only offers sequence numbers it was given, so
/// this signals a caller bug rather than a game rule violation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("History entry {} does not exist (log has {} entries)", requested, len)]
pub struct SelectError {
    /// The sequence number asked for.
    pub requested: usize,
    /// Number of entries in the log.
    pub len: usize,
}

/// Ordered, dense log of history entries.
///
/// Never empty: entry 0 is always the initial board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LogParts")]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct LogParts {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<LogParts> for HistoryLog {
    type Error = InvalidSession;

    fn try_from(parts: LogParts) -> Result<Self, Self::Error> {
        if parts.entries.is_empty() {
            return Err(InvalidSession::new("History log has no entries"));
        }
        Ok(Self {
            entries: parts.entries,
        })
    }
}

impl HistoryLog {
    /// Creates a log holding only the initial empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(0, Board::new(), GameStatus::START)],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the given sequence number.
    pub fn get(&self, sequence: usize) -> Option<&HistoryEntry> {
        self.entries.get(sequence)
    }

    /// Entry with the given sequence number, or a [`SelectError`].
    pub fn select(&self, sequence: usize) -> Result<&HistoryEntry, SelectError> {
        self.get(sequence).ok_or(SelectError {
            requested: sequence,
            len: self.len(),
        })
    }

    /// All entries in sequence order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The last stored entry.
    pub fn latest(&self) -> &HistoryEntry {
        // Invariant: the initial entry is never removed.
        &self.entries[self.entries.len() - 1]
    }

    /// Records a new snapshot made from entry `after`.
    ///
    /// Entries beyond `after` are discarded first, then the snapshot is
    /// appended with sequence number `after + 1`. Returns that number.
    #[instrument(skip(self, board), fields(len = self.entries.len()))]
    pub fn record(&mut self, after: usize, board: Board, status: GameStatus) -> usize {
        let keep = (after + 1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(
                discarded = self.entries.len() - keep,
                "Discarding future history entries"
            );
        }
        self.entries.truncate(keep);

        let sequence = self.entries.len();
        self.entries.push(HistoryEntry::new(sequence, board, status));
        sequence
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
