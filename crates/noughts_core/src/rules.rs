//! Win evaluation for tic-tac-toe.
//!
//! Pure functions over board snapshots, separated from board storage so
//! the controller and the invariant checks can share them.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in priority order: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A decided game: the winning player and the completed line.
///
/// The line indices let presentation highlight the three winning squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player who completed the line.
    pub player: Player,
    /// Board indices of the completed line, in line order.
    pub line: [usize; 3],
}

/// Checks if there is a winner on the board.
///
/// Scans the eight lines in fixed priority order and returns the first
/// line whose three squares hold the same player's mark, `None` otherwise.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            if let Some(Square::Occupied(player)) = sq {
                return Some(Win { player, line });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(board: &mut Board, positions: &[usize], player: Player) {
        for &pos in positions {
            board.set(pos, Square::Occupied(player)).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_winner_each_line() {
        for line in LINES {
            let mut board = Board::new();
            occupied(&mut board, &line, Player::X);
            let win = evaluate(&board).expect("line should win");
            assert_eq!(win.player, Player::X);
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_winner_diagonal_for_o() {
        let mut board = Board::new();
        occupied(&mut board, &[2, 4, 6], Player::O);
        assert_eq!(
            evaluate(&board),
            Some(Win {
                player: Player::O,
                line: [2, 4, 6]
            })
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        occupied(&mut board, &[0, 1], Player::X);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        occupied(&mut board, &[0, 1], Player::X);
        occupied(&mut board, &[2], Player::O);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_full_drawn_board() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        occupied(&mut board, &[0, 2, 4, 5, 7], Player::X);
        occupied(&mut board, &[1, 3, 6, 8], Player::O);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_row_takes_priority_over_diagonal() {
        // X holds both the top row and the main diagonal; the row is
        // checked first, so its indices are reported.
        let mut board = Board::new();
        occupied(&mut board, &[0, 1, 2, 4, 8], Player::X);
        let win = evaluate(&board).unwrap();
        assert_eq!(win.line, [0, 1, 2]);
    }
}
