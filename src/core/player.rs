//! Players and game identity.
//!
//! ## GameId
//!
//! Process-unique identifier stamped on a `Player` when it joins a game.
//! A player carrying a `GameId` can never be registered again.
//!
//! ## Player
//!
//! Name, turn number, banked score and finished flag. Created standalone,
//! then moved into a `Game` by `Game::register_player`.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of a single `Game` instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Allocate a fresh, never reused id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

/// A participant in a Greed game.
///
/// ```
/// use greed::core::Player;
///
/// let player = Player::new("john");
/// assert_eq!(player.name(), "john");
/// assert_eq!(player.turn(), None);
/// assert!(player.game().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    turn: Option<u32>,
    score: u32,
    finished: bool,
    game: Option<GameId>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            turn: None,
            score: 0,
            finished: false,
            game: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turn number (1-based), assigned at registration.
    #[must_use]
    pub fn turn(&self) -> Option<u32> {
        self.turn
    }

    /// Banked score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Overwrite the banked score, for setting up scenarios mid-game.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// True once the player may no longer roll.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Game this player was registered into, if any.
    #[must_use]
    pub fn game(&self) -> Option<GameId> {
        self.game
    }

    /// On the board: has banked at least once.
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.score > 0
    }

    pub(crate) fn join(&mut self, game: GameId, turn: u32) {
        self.game = Some(game);
        self.turn = Some(turn);
    }

    pub(crate) fn bank(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.turn {
            Some(turn) => write!(f, "{} (turn {}, {} pts)", self.name, turn, self.score),
            None => write!(f, "{}", self.name),
        }
    }
}
