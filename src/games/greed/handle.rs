//! Player-side view of a registered player.

use serde::{Deserialize, Serialize};

use super::game::Game;
use super::turn::{RollOutcome, TurnSummary};
use crate::core::{GameId, Result};
use crate::dice::DiceSource;

/// Ticket returned by `Game::register_player`.
///
/// Copyable and tied to the game that issued it; using it against any other
/// game fails with `GreedError::UnknownPlayer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHandle {
    game: GameId,
    turn: u32,
}

impl PlayerHandle {
    pub(crate) fn new(game: GameId, turn: u32) -> Self {
        Self { game, turn }
    }

    #[must_use]
    pub fn game(self) -> GameId {
        self.game
    }

    #[must_use]
    pub fn turn(self) -> u32 {
        self.turn
    }

    /// Roll the remaining dice. Same as `game.roll_for_player(self)`.
    pub fn roll<D: DiceSource>(self, game: &mut Game<D>) -> Result<RollOutcome> {
        game.roll_for_player(self)
    }

    /// Stop rolling and try to bank. Same as `game.change_turn(self)`.
    pub fn end_turn<D: DiceSource>(self, game: &mut Game<D>) -> Result<TurnSummary> {
        game.change_turn(self)
    }
}
