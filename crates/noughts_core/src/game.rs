//! Game controller: click handling, history navigation, status derivation.

use crate::history::{History, HistoryEntry, MoveCoord};
use crate::rules::{Win, evaluate};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// History length of a finished nine-move game: the initial empty
/// snapshot plus one entry per move. A history this long with no winner
/// is a draw.
const DRAWN_HISTORY_LEN: usize = Board::SIZE + 1;

/// Result of a click, reported for callers that want to react but never
/// required reading: invalid clicks are silently ignored by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a click may be ignored; check the outcome if it matters"]
pub enum ClickOutcome {
    /// The mark was placed and a history entry appended.
    Placed,
    /// The click hit an occupied square, a decided game, or an
    /// out-of-range index; nothing changed.
    Ignored,
}

/// Current status of the game, derived from the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player completed a line.
    Won(Player),
    /// Nine moves played, no line completed.
    Draw,
    /// Game is ongoing; this player moves next.
    Next(Player),
}

/// Complete game state: snapshot history, the step being viewed, the turn
/// flag, the winner cached for the viewed step, and the history display
/// order.
///
/// This struct is the only mutation surface: all transitions go through
/// [`Game::click`], [`Game::jump_to`], and [`Game::toggle_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: History,
    current_step: usize,
    x_is_next: bool,
    winner: Option<Win>,
    ascending: bool,
}

impl Game {
    /// Creates a fresh game: empty board, X to move, ascending history.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            x_is_next: true,
            winner: None,
            ascending: true,
        }
    }

    /// Places the current player's mark at board index `idx` (0-8).
    ///
    /// No-op when the viewed board already has a winner, the square is
    /// occupied, or `idx` is out of range. Otherwise truncates any
    /// history beyond the viewed step, appends the new snapshot,
    /// recomputes the winner, flips the turn, and views the new step.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn click(&mut self, idx: usize) -> ClickOutcome {
        let current = self.board();
        // Winner is recomputed from the viewed board rather than read
        // from the cache: after a jump the cache tracks the viewed step,
        // and the precondition must agree with what the player sees.
        if evaluate(current).is_some() || !matches!(current.get(idx), Some(Square::Empty)) {
            debug!(idx, "click ignored");
            return ClickOutcome::Ignored;
        }

        let mut board = current.clone();
        let player = self.to_move();
        if board.set(idx, Square::Occupied(player)).is_err() {
            return ClickOutcome::Ignored;
        }

        self.history.truncate_after(self.current_step);
        self.winner = evaluate(&board);
        debug!(idx, board = %board.display(), "mark placed");
        self.history
            .push(HistoryEntry::new(board, MoveCoord::from_index(idx)));
        self.x_is_next = player.opponent() == Player::X;
        self.current_step = self.history.len() - 1;
        ClickOutcome::Placed
    }

    /// Views the given history step without altering the stored history.
    ///
    /// The winner cache is recomputed from that step's board and the turn
    /// flag derived from the step's parity. Out-of-range steps are
    /// ignored; rendered steps are always in range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        let Some(entry) = self.history.get(step) else {
            debug!(step, "jump ignored");
            return;
        };
        self.winner = evaluate(entry.board());
        self.current_step = step;
        self.x_is_next = step % 2 == 0;
    }

    /// Flips the history display order. The stored history is untouched;
    /// only [`Game::display_order`] changes.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Derives the status for the viewed step.
    ///
    /// Winner beats draw: a ninth move that completes a line reports the
    /// win. The draw check is the stored-history length, not a board
    /// scan, so a finished drawn game reports "draw" at every viewed
    /// step that has no winner.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner {
            GameStatus::Won(win.player)
        } else if self.history.len() == DRAWN_HISTORY_LEN {
            GameStatus::Draw
        } else {
            GameStatus::Next(self.to_move())
        }
    }

    /// Returns the player whose turn it is at the viewed step.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Returns the board at the viewed step.
    pub fn board(&self) -> &Board {
        // current_step is kept in range by every mutation.
        self.history.entries()[self.current_step].board()
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the index of the viewed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the winner cached for the viewed step, if any.
    pub fn winner(&self) -> Option<Win> {
        self.winner
    }

    /// Returns `true` when history renders oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// History step indices in display order.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.history.len()).collect();
        if !self.ascending {
            order.reverse();
        }
        order
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
