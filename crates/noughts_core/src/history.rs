//! Move history as an ordered sequence of board snapshots.
//!
//! Every move appends a fresh snapshot; the list always starts with the
//! empty board so step 0 is a valid navigation target.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// 1-based grid coordinates of the move that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCoord {
    /// Row 1-3, counted from the top.
    pub row: usize,
    /// Column 1-3, counted from the left.
    pub col: usize,
}

impl MoveCoord {
    /// Derives the coordinates from a row-major board index (0-8).
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: idx / 3 + 1,
            col: idx % 3 + 1,
        }
    }
}

/// One board snapshot plus the move that created it.
///
/// The initial entry has no move annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    moved: Option<MoveCoord>,
}

impl HistoryEntry {
    /// Creates an entry for a played move.
    pub fn new(board: Board, moved: MoveCoord) -> Self {
        Self {
            board,
            moved: Some(moved),
        }
    }

    /// Creates the initial entry: empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            moved: None,
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot, if any.
    pub fn moved(&self) -> Option<MoveCoord> {
        self.moved
    }
}

/// Insertion-ordered list of history entries.
///
/// Index 0 is always the empty board; entry *i* differs from entry *i-1*
/// in exactly one previously-empty square (checked by the invariants
/// module, not enforced here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial empty snapshot.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at the given step.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Returns all entries in move order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`, keeping `0..=step`.
    pub fn truncate_after(&mut self, step: usize) {
        self.entries.truncate(step + 1);
    }

    /// Appends a new entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_new_history_has_initial_entry() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        let entry = history.get(0).unwrap();
        assert_eq!(entry.board(), &Board::new());
        assert_eq!(entry.moved(), None);
    }

    #[test]
    fn test_move_coord_from_index() {
        assert_eq!(MoveCoord::from_index(0), MoveCoord { row: 1, col: 1 });
        assert_eq!(MoveCoord::from_index(4), MoveCoord { row: 2, col: 2 });
        assert_eq!(MoveCoord::from_index(5), MoveCoord { row: 2, col: 3 });
        assert_eq!(MoveCoord::from_index(8), MoveCoord { row: 3, col: 3 });
    }

    #[test]
    fn test_truncate_after_keeps_prefix() {
        let mut history = History::new();
        for idx in 0..4 {
            let mut board = history.get(history.len() - 1).unwrap().board().clone();
            board.set(idx, Square::Occupied(Player::X)).unwrap();
            history.push(HistoryEntry::new(board, MoveCoord::from_index(idx)));
        }
        assert_eq!(history.len(), 5);

        history.truncate_after(2);
        assert_eq!(history.len(), 3);
        assert_eq!(
            history.get(2).unwrap().moved(),
            Some(MoveCoord::from_index(1))
        );
    }
}
