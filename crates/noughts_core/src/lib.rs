//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players ([`Board`], [`Square`], [`Player`])
//! - **Rules**: win evaluation over board snapshots ([`evaluate`], [`Win`])
//! - **History**: one immutable snapshot per move, starting from the
//!   empty board ([`History`], [`HistoryEntry`])
//! - **Controller**: click handling, jump-to-step navigation, display
//!   order, status derivation ([`Game`])
//! - **Invariants**: first-class, independently testable properties of
//!   the state ([`invariants`])
//!
//! The crate performs no I/O; presentation layers consume snapshots and
//! feed back click and navigation events.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! let _ = game.click(4);
//! let _ = game.click(0);
//! assert_eq!(game.status(), GameStatus::Next(Player::X));
//!
//! // Jump back to the start; the stored history survives.
//! game.jump_to(0);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
pub mod invariants;
mod rules;
mod types;

pub use game::{ClickOutcome, Game, GameStatus};
pub use history::{History, HistoryEntry, MoveCoord};
pub use rules::{Win, evaluate};
pub use types::{Board, OutOfBounds, Player, Square};
