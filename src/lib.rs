//! # greed
//!
//! Turn, score and end-of-game state machine for Greed, the five-dice game.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: The game never rolls dice itself. It asks a
//!    `DiceSource`, so tests script rolls and real play uses a seeded RNG.
//!
//! 2. **Explicit Lifecycle**: `NotStarted -> Started -> FinalRound -> Over`,
//!    carried as an enum rather than flags.
//!
//! 3. **No Back-References**: The `Game` owns its players. Callers act through
//!    copyable `PlayerHandle`s; a `Player` records the `GameId` it joined so it
//!    can never join a second game.
//!
//! ## Modules
//!
//! - `core`: Players, game ids, configuration, RNG, errors
//! - `dice`: `DiceSource` trait, seeded `DiceSet`, `ScriptedDice`
//! - `rules`: Point table and non-scoring dice count
//! - `games`: The Greed state machine

pub mod core;
pub mod dice;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameId, GameRng, GameRngState, GreedConfig, GreedError, Player, Result};

pub use crate::dice::{Dice, DiceSet, DiceSource, ScriptedDice};

pub use crate::rules::{non_scoring_dice, score};

pub use crate::games::greed::{
    Game, GameResult, Lifecycle, PlayerHandle, RollOutcome, Turn, TurnSummary,
};
