//! Initial-entry invariant: history starts from the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: history\[0\] is the all-empty board with no move annotation.
///
/// Step 0 is the "game start" navigation target; nothing may ever replace
/// or annotate it.
pub struct InitialBoardEmpty;

impl Invariant<Game> for InitialBoardEmpty {
    fn holds(game: &Game) -> bool {
        match game.history().get(0) {
            Some(entry) => entry.board() == &Board::new() && entry.moved().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History entry 0 is the empty board with no move annotation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new();
        assert!(InitialBoardEmpty::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Game::new();
        for idx in [4, 0, 8] {
            let _ = game.click(idx);
        }
        assert!(InitialBoardEmpty::holds(&game));
    }

    #[test]
    fn test_holds_after_jump_and_truncation() {
        let mut game = Game::new();
        for idx in [4, 0, 8, 1] {
            let _ = game.click(idx);
        }
        game.jump_to(1);
        let _ = game.click(2);
        assert!(InitialBoardEmpty::holds(&game));
    }
}
