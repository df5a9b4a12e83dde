//! Greed game state machine.

use tracing::{debug, info};

use super::handle::PlayerHandle;
use super::turn::{GameResult, Lifecycle, RollOutcome, Turn, TurnSummary};
use crate::core::{GameId, GreedConfig, GreedError, Player, Result};
use crate::dice::{DiceSet, DiceSource};
use crate::rules::{non_scoring_dice, score};

/// One game of Greed.
///
/// Owns its players (in registration order, which is also turn order), the
/// dice source and the active turn.
///
/// ## Example
///
/// ```
/// use greed::dice::ScriptedDice;
/// use greed::games::greed::Game;
///
/// let mut game = Game::new(ScriptedDice::new([vec![1, 1, 1, 2, 3]]));
/// let john = game.register("john").unwrap();
/// let aria = game.register("aria").unwrap();
/// game.start().unwrap();
///
/// let roll = john.roll(&mut game).unwrap();
/// assert_eq!(roll.points, 1000);
///
/// let summary = john.end_turn(&mut game).unwrap();
/// assert_eq!(summary.score, 1000);
/// assert_eq!(summary.next_turn, Some(aria.turn()));
/// ```
#[derive(Clone, Debug)]
pub struct Game<D = DiceSet> {
    id: GameId,
    config: GreedConfig,
    dice: D,
    players: Vec<Player>,
    lifecycle: Lifecycle,
    turn: Option<Turn>,
}

impl<D: DiceSource> Game<D> {
    /// Create a game with the default rules.
    pub fn new(dice: D) -> Self {
        Self::build(GreedConfig::default(), dice)
    }

    /// Create a game with custom rules.
    pub fn with_config(config: GreedConfig, dice: D) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, dice))
    }

    fn build(config: GreedConfig, dice: D) -> Self {
        Self {
            id: GameId::next(),
            config,
            dice,
            players: Vec::new(),
            lifecycle: Lifecycle::NotStarted,
            turn: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GreedConfig {
        &self.config
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    // === Registration & lifecycle ===

    /// Add a player and give it the next turn number.
    ///
    /// Fails if the game has started or the player already joined a game.
    pub fn register_player(&mut self, mut player: Player) -> Result<PlayerHandle> {
        if self.lifecycle != Lifecycle::NotStarted {
            return Err(GreedError::AlreadyStarted);
        }
        if player.game().is_some() {
            return Err(GreedError::PlayerAlreadyInGame {
                name: player.name().to_string(),
            });
        }

        let turn = self.players.len() as u32 + 1;
        player.join(self.id, turn);
        debug!(game = %self.id, player = player.name(), turn, "player registered");
        self.players.push(player);

        Ok(PlayerHandle::new(self.id, turn))
    }

    /// Register a new player by name.
    pub fn register(&mut self, name: impl Into<String>) -> Result<PlayerHandle> {
        self.register_player(Player::new(name))
    }

    /// Start play: zero every score and hand the first turn to player 1.
    pub fn start(&mut self) -> Result<()> {
        if self.lifecycle != Lifecycle::NotStarted {
            return Err(GreedError::AlreadyStarted);
        }
        if self.players.len() < self.config.min_players {
            return Err(GreedError::NotEnoughPlayers {
                registered: self.players.len(),
                required: self.config.min_players,
            });
        }

        for player in &mut self.players {
            player.set_score(0);
        }
        self.lifecycle = Lifecycle::Started;
        self.turn = Some(Turn::new(1, self.config.dice_count));

        info!(game = %self.id, players = self.players.len(), "game started");
        Ok(())
    }

    // === Turn actions ===

    /// Roll the active turn's remaining dice for `player`.
    ///
    /// A roll scoring nothing busts: the turn ends at once, exactly as if the
    /// player had called `change_turn`, and the summary is in `bust`.
    ///
    /// # Panics
    /// Panics if the dice source returns a face outside `1..=6`.
    pub fn roll_for_player(&mut self, player: PlayerHandle) -> Result<RollOutcome> {
        let (idx, mut turn) = self.check_can_act(player)?;

        let dice = self.dice.roll(turn.dice_remaining);
        let non_scoring = non_scoring_dice(&dice);
        let points = score(&dice);

        let hot_dice = non_scoring == 0;
        turn.dice_remaining = if hot_dice { self.config.dice_count } else { non_scoring };
        turn.pending_score += points;
        self.turn = Some(turn);

        debug!(
            game = %self.id,
            player = turn.current,
            dice = ?dice.as_slice(),
            points,
            pending = turn.pending_score,
            dice_remaining = turn.dice_remaining,
            "rolled"
        );

        let bust = if points == 0 {
            Some(self.finish_turn(idx, turn.pending_score))
        } else {
            None
        };

        Ok(RollOutcome {
            dice,
            points,
            pending_score: turn.pending_score,
            dice_remaining: turn.dice_remaining,
            hot_dice,
            bust,
        })
    }

    /// End `player`'s turn by choice, banking the pending score if allowed.
    pub fn change_turn(&mut self, player: PlayerHandle) -> Result<TurnSummary> {
        let (idx, turn) = self.check_can_act(player)?;
        Ok(self.finish_turn(idx, turn.pending_score))
    }

    /// Validate a turn action and return the acting player's index with the
    /// active turn.
    fn check_can_act(&self, handle: PlayerHandle) -> Result<(usize, Turn)> {
        let idx = self.index_of(handle)?;

        if self.lifecycle == Lifecycle::NotStarted {
            return Err(GreedError::NotStarted);
        }
        if self.players[idx].is_finished() {
            return Err(GreedError::PlayerFinished { player: handle.turn() });
        }

        let turn = self.turn.ok_or(GreedError::NotStarted)?;
        if turn.current != handle.turn() {
            return Err(GreedError::NotYourTurn {
                player: handle.turn(),
                active: turn.current,
            });
        }

        Ok((idx, turn))
    }

    fn index_of(&self, handle: PlayerHandle) -> Result<usize> {
        let idx = (handle.turn() as usize).wrapping_sub(1);
        if handle.game() != self.id || idx >= self.players.len() {
            return Err(GreedError::UnknownPlayer { turn: handle.turn() });
        }
        Ok(idx)
    }

    /// Bank or forfeit `pending`, apply the final-round rules and pass play on.
    fn finish_turn(&mut self, idx: usize, pending: u32) -> TurnSummary {
        let threshold = self.config.opening_threshold;
        let target = self.config.target_score;

        let player = &mut self.players[idx];
        let banked = if player.is_on_board() || pending >= threshold {
            player.bank(pending);
            pending
        } else {
            0
        };

        if player.score() >= target && self.lifecycle == Lifecycle::Started {
            self.lifecycle = Lifecycle::FinalRound;
            info!(game = %self.id, player = player.name(), score = player.score(), "final round");
        }
        if self.lifecycle == Lifecycle::FinalRound {
            player.finish();
        }

        let acting = idx as u32 + 1;
        let score = player.score();
        let finished = player.is_finished();

        let next_turn = if self.players.iter().all(Player::is_finished) {
            let winner = self.leader_index().map_or(acting, |i| i as u32 + 1);
            self.lifecycle = Lifecycle::Over { winner };
            self.turn = None;
            info!(game = %self.id, winner, "game over");
            None
        } else {
            let next = ((idx + 1) % self.players.len()) as u32 + 1;
            self.turn = Some(Turn::new(next, self.config.dice_count));
            Some(next)
        };

        debug!(game = %self.id, player = acting, pending, banked, score, finished, ?next_turn, "turn ended");

        TurnSummary {
            player: acting,
            pending_score: pending,
            banked,
            score,
            finished,
            next_turn,
        }
    }

    /// First player with the strictly highest banked score.
    fn leader_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, player) in self.players.iter().enumerate() {
            if best.map_or(true, |b| player.score() > self.players[b].score()) {
                best = Some(i);
            }
        }
        best
    }

    // === Queries ===

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player with the given turn number.
    #[must_use]
    pub fn player(&self, turn: u32) -> Option<&Player> {
        self.players.get((turn as usize).checked_sub(1)?)
    }

    /// Mutable access to a player, for setting up scenarios.
    pub fn player_mut(&mut self, turn: u32) -> Option<&mut Player> {
        self.players.get_mut((turn as usize).checked_sub(1)?)
    }

    /// Handle for a registered turn number.
    pub fn handle(&self, turn: u32) -> Result<PlayerHandle> {
        let handle = PlayerHandle::new(self.id, turn);
        self.index_of(handle)?;
        Ok(handle)
    }

    /// Handles for every player, in turn order.
    #[must_use]
    pub fn handles(&self) -> Vec<PlayerHandle> {
        (1..=self.players.len() as u32)
            .map(|turn| PlayerHandle::new(self.id, turn))
            .collect()
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The active turn; `None` before start and after the game ends.
    #[must_use]
    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    /// Handle of the player who may act now.
    #[must_use]
    pub fn active_handle(&self) -> Option<PlayerHandle> {
        self.turn.map(|t| PlayerHandle::new(self.id, t.current))
    }

    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.player(self.turn?.current)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.lifecycle != Lifecycle::NotStarted
    }

    /// True from the moment someone reaches the target score.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::FinalRound | Lifecycle::Over { .. })
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Over { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.lifecycle {
            Lifecycle::Over { winner } => self.player(winner),
            _ => None,
        }
    }

    /// Players by banked score, highest first; ties keep turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked
    }

    /// Final outcome, once every player has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.lifecycle {
            Lifecycle::Over { winner } => Some(GameResult {
                winner,
                final_scores: self.players.iter().map(Player::score).collect(),
            }),
            _ => None,
        }
    }
}
