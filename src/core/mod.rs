//! Core types: players, configuration, RNG, errors.
//!
//! These are shared by the dice sources, the scoring rules and the game
//! state machine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{GameId, Player};
pub use rng::{GameRng, GameRngState};
pub use config::GreedConfig;
pub use error::{GreedError, Result};
