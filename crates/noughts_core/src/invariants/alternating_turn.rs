//! Turn invariant: the turn flag tracks the viewed step's parity.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: X is to move exactly when the viewed step is even.
///
/// Holds both after clicks (each click advances the step by one and flips
/// the turn) and after jumps (the turn is rederived from parity).
pub struct AlternatingTurn;

impl Invariant<Game> for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        let x_expected = game.current_step() % 2 == 0;
        (game.to_move() == Player::X) == x_expected
    }

    fn description() -> &'static str {
        "X moves exactly on even-numbered steps"
    }
}
