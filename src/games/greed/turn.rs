//! Turn state and the values reported by turn actions.

use serde::{Deserialize, Serialize};

use crate::dice::Dice;

/// Where a game is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Accepting registrations.
    NotStarted,
    /// Players take turns; nobody has reached the target score.
    Started,
    /// Someone reached the target; each player finishes on their next turn end.
    FinalRound,
    /// Every player finished. Holds the winner's turn number.
    Over { winner: u32 },
}

/// The active turn. Replaced wholesale whenever play passes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Turn number of the player who may act.
    pub current: u32,
    /// Points rolled this turn and not yet banked.
    pub pending_score: u32,
    /// Dice the next roll uses.
    pub dice_remaining: usize,
}

impl Turn {
    #[must_use]
    pub fn new(current: u32, dice: usize) -> Self {
        Self {
            current,
            pending_score: 0,
            dice_remaining: dice,
        }
    }
}

/// What a single roll did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// Faces rolled.
    pub dice: Dice,
    /// Points this roll scored.
    pub points: u32,
    /// Pending score after adding `points`.
    pub pending_score: u32,
    /// Dice available for the next roll.
    pub dice_remaining: usize,
    /// Every die scored, so the next roll uses a full set again.
    pub hot_dice: bool,
    /// Set when the roll scored nothing and ended the turn.
    pub bust: Option<TurnSummary>,
}

impl RollOutcome {
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.bust.is_some()
    }
}

/// Result of ending a turn, by choice or by busting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// Turn number of the player whose turn ended.
    pub player: u32,
    /// Pending score at the moment the turn ended.
    pub pending_score: u32,
    /// Points moved into the banked score (0 or `pending_score`).
    pub banked: u32,
    /// Banked score afterwards.
    pub score: u32,
    /// Whether the player is now done for the game.
    pub finished: bool,
    /// Who plays next, `None` when the game is over.
    pub next_turn: Option<u32>,
}

impl TurnSummary {
    /// Points thrown away by the opening threshold.
    #[must_use]
    pub fn forfeited(&self) -> u32 {
        self.pending_score - self.banked
    }
}

/// Final outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Turn number of the winner.
    pub winner: u32,
    /// Banked scores, indexed by turn number minus one.
    pub final_scores: Vec<u32>,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, turn: u32) -> bool {
        self.winner == turn
    }

    /// Banked score of a player, if the turn number exists.
    #[must_use]
    pub fn score_of(&self, turn: u32) -> Option<u32> {
        let idx = (turn as usize).checked_sub(1)?;
        self.final_scores.get(idx).copied()
    }
}
