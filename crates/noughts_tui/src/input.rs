//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor (0-8, row-major) by one square, clamped at the
/// grid edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        _ => (row, col),
    };
    row * 3 + col
}
