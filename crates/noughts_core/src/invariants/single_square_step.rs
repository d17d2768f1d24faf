//! Step invariant: adjacent snapshots differ in exactly one square.

use super::Invariant;
use crate::game::Game;
use crate::history::MoveCoord;
use crate::types::Square;

/// Invariant: each history entry derives from its predecessor by filling
/// exactly one previously-empty square, and its move annotation names
/// that square.
pub struct SingleSquareStep;

impl Invariant<Game> for SingleSquareStep {
    fn holds(game: &Game) -> bool {
        let entries = game.history().entries();
        for pair in entries.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let changed: Vec<usize> = prev
                .board()
                .squares()
                .iter()
                .zip(next.board().squares())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(idx, _)| idx)
                .collect();

            let [idx] = changed[..] else {
                return false;
            };
            if prev.board().get(idx) != Some(Square::Empty) {
                return false;
            }
            if matches!(next.board().get(idx), Some(Square::Empty) | None) {
                return false;
            }
            if next.moved() != Some(MoveCoord::from_index(idx)) {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Adjacent history entries differ in exactly one previously-empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new();
        assert!(SingleSquareStep::holds(&game));
    }

    #[test]
    fn test_holds_after_valid_clicks() {
        let mut game = Game::new();
        for idx in [0, 4, 8, 1, 2] {
            let _ = game.click(idx);
        }
        assert!(SingleSquareStep::holds(&game));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = Game::new();
        for idx in [0, 4, 8, 1] {
            let _ = game.click(idx);
        }
        game.jump_to(2);
        let _ = game.click(6);
        assert!(SingleSquareStep::holds(&game));
    }

    #[test]
    fn test_ignored_clicks_do_not_break_it() {
        let mut game = Game::new();
        let _ = game.click(4);
        let _ = game.click(4);
        let _ = game.click(42);
        assert!(SingleSquareStep::holds(&game));
        assert_eq!(game.history().len(), 2);
    }
}
