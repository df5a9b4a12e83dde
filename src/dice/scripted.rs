//! Dice that replay a fixed script.

use std::collections::VecDeque;

use super::{Dice, DiceSource, SIDES};

/// Replays queued rolls in order, ignoring the requested count.
///
/// Panics when asked to roll past the end of the script; a test that does so
/// rolled more often than it planned.
///
/// ```
/// use greed::dice::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([vec![1, 1, 1, 2, 3], vec![1, 5]]);
/// assert_eq!(dice.roll(5).as_slice(), &[1, 1, 1, 2, 3]);
/// assert_eq!(dice.roll(2).as_slice(), &[1, 5]);
/// assert!(dice.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<Dice>,
    requested: Vec<usize>,
}

impl ScriptedDice {
    pub fn new<I, R>(rolls: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut dice = Self::default();
        for roll in rolls {
            dice.push(roll);
        }
        dice
    }

    /// Queue another roll.
    ///
    /// # Panics
    /// Panics if a face is outside `1..=6`.
    pub fn push(&mut self, roll: impl AsRef<[u8]>) {
        let roll = roll.as_ref();
        assert!(
            roll.iter().all(|face| (1..=SIDES).contains(face)),
            "scripted face out of range: {:?}",
            roll
        );
        self.rolls.push_back(Dice::from_slice(roll));
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Dice counts the game asked for, in call order.
    #[must_use]
    pub fn requested(&self) -> &[usize] {
        &self.requested
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, count: usize) -> Dice {
        self.requested.push(count);
        match self.rolls.pop_front() {
            Some(roll) => roll,
            None => panic!("scripted dice exhausted (roll #{} for {} dice)", self.requested.len(), count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_and_records_requests() {
        let mut dice = ScriptedDice::new([vec![2, 2, 2, 2, 2]]);
        dice.push([3, 4]);

        assert_eq!(dice.roll(5).as_slice(), &[2, 2, 2, 2, 2]);
        assert_eq!(dice.roll(2).as_slice(), &[3, 4]);
        assert_eq!(dice.requested(), &[5, 2]);
        assert!(dice.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "scripted face out of range")]
    fn test_rejects_bad_face() {
        ScriptedDice::new([vec![7, 7, 7, 7, 7]]);
    }

    #[test]
    #[should_panic(expected = "scripted dice exhausted")]
    fn test_exhausted_script_panics() {
        let mut dice = ScriptedDice::default();
        dice.roll(5);
    }
}
