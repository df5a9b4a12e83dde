//! Error kinds for misuse of the game API.
//!
//! Every variant is a precondition violation. Nothing here is transient, so
//! callers fix their usage instead of retrying.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GreedError>;

/// Failure returned by registration, start and turn actions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GreedError {
    /// Registration attempted after the game started.
    #[error("game has already started")]
    AlreadyStarted,

    /// The player already belongs to a game (this one or another).
    #[error("player {name:?} is already registered in a game")]
    PlayerAlreadyInGame { name: String },

    /// `start()` called with too few registered players.
    #[error("not enough players: {registered} registered, {required} required")]
    NotEnoughPlayers { registered: usize, required: usize },

    /// Turn action attempted before `start()`.
    #[error("game has not started yet")]
    NotStarted,

    /// Turn action by a player whose turn it is not.
    #[error("not player {player}'s turn (active turn is {active})")]
    NotYourTurn { player: u32, active: u32 },

    /// Turn action by a player who may no longer roll.
    #[error("player {player} has finished playing")]
    PlayerFinished { player: u32 },

    /// A handle or turn number that this game never issued.
    #[error("no player with turn {turn} in this game")]
    UnknownPlayer { turn: u32 },

    /// Rejected `GreedConfig`.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
