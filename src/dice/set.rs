//! Seeded dice source.

use super::{Dice, DiceSource, SIDES};
use crate::core::{GameRng, GameRngState};

/// Uniform six-sided dice backed by `GameRng`.
///
/// ```
/// use greed::dice::{DiceSet, DiceSource};
///
/// let mut dice = DiceSet::new(42);
/// let roll = dice.roll(5);
/// assert_eq!(roll.len(), 5);
/// assert!(roll.iter().all(|&d| (1..=6).contains(&d)));
/// ```
#[derive(Clone, Debug)]
pub struct DiceSet {
    rng: GameRng,
    last: Dice,
}

impl DiceSet {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            last: Dice::new(),
        }
    }

    /// Faces of the most recent roll.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.last
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl DiceSource for DiceSet {
    fn roll(&mut self, count: usize) -> Dice {
        let dice: Dice = (0..count).map(|_| self.rng.roll_die(SIDES)).collect();
        self.last = dice.clone();
        dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_count_and_range() {
        let mut dice = DiceSet::new(42);
        for count in 1..=5 {
            let roll = dice.roll(count);
            assert_eq!(roll.len(), count);
            assert!(roll.iter().all(|&d| (1..=SIDES).contains(&d)));
            assert_eq!(dice.values(), roll.as_slice());
        }
    }

    #[test]
    fn test_roll_zero_dice() {
        let mut dice = DiceSet::new(42);
        assert!(dice.roll(0).is_empty());
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = DiceSet::new(99);
        let mut b = DiceSet::new(99);
        for _ in 0..20 {
            assert_eq!(a.roll(5), b.roll(5));
        }
    }

    #[test]
    fn test_rolls_change_between_calls() {
        let mut dice = DiceSet::new(7);
        let rolls: Vec<_> = (0..10).map(|_| dice.roll(5)).collect();
        assert!(rolls.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_resume_from_rng_state() {
        let mut dice = DiceSet::new(3);
        dice.roll(5);
        let state = dice.rng_state();
        let expected = dice.roll(5);

        let mut resumed = DiceSet::from_rng(GameRng::from_state(&state));
        assert_eq!(resumed.roll(5), expected);
    }
}
