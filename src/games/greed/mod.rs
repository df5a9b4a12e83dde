//! Greed, the dice game.
//!
//! - Players register, then `start()` zeroes their scores
//! - On your turn: roll the remaining dice, then roll again or stop
//! - A roll scoring nothing busts and ends the turn
//! - Banking needs 300 pending points until you are on the board
//! - Reaching 3000 starts the final round; everyone finishes on their next turn end
//!
//! Supports any number of players from the configured minimum up.

mod game;
mod handle;
mod turn;

pub use game::Game;
pub use handle::PlayerHandle;
pub use turn::{GameResult, Lifecycle, RollOutcome, Turn, TurnSummary};
