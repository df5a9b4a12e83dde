//! Dice sources.
//!
//! The game never draws random numbers itself; it asks a `DiceSource` for
//! `n` faces. `DiceSet` is the seeded production source, `ScriptedDice`
//! replays fixed rolls for tests and demos.

mod set;
mod scripted;

use smallvec::SmallVec;

pub use set::DiceSet;
pub use scripted::ScriptedDice;

/// Faces of one roll. Up to five dice stay inline.
pub type Dice = SmallVec<[u8; 5]>;

/// Number of faces on a die.
pub const SIDES: u8 = 6;

/// Anything that can roll dice.
pub trait DiceSource {
    /// Roll `count` independent dice, each in `1..=6`.
    fn roll(&mut self, count: usize) -> Dice;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self, count: usize) -> Dice {
        (**self).roll(count)
    }
}
