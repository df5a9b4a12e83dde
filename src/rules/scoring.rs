//! Greed point table.
//!
//! | Dice            | Points      |
//! |-----------------|-------------|
//! | three 1s        | 1000        |
//! | three of N      | 100 * N     |
//! | single 1        | 100         |
//! | single 5        | 50          |
//!
//! At most one triple counts per roll. Dice outside a triple that are not
//! 1s or 5s score nothing.

use crate::dice::SIDES;

/// Per-face counts, indexed by face value (index 0 unused).
fn face_counts(dice: &[u8]) -> [usize; SIDES as usize + 1] {
    let mut counts = [0usize; SIDES as usize + 1];
    for &face in dice {
        assert!((1..=SIDES).contains(&face), "die face out of range: {}", face);
        counts[face as usize] += 1;
    }
    counts
}

/// Face that forms the scoring triple, if any. Lowest face wins if two
/// triples are possible with more than five dice.
fn triple_face(counts: &[usize]) -> Option<usize> {
    (1..counts.len()).find(|&face| counts[face] >= 3)
}

/// Points for a roll. Order of `dice` does not matter.
///
/// # Panics
/// Panics if a face is outside `1..=6`.
///
/// ```
/// use greed::rules::score;
///
/// assert_eq!(score(&[1, 1, 1, 5, 1]), 1150);
/// assert_eq!(score(&[2, 3, 4, 6, 2]), 0);
/// ```
#[must_use]
pub fn score(dice: &[u8]) -> u32 {
    let mut counts = face_counts(dice);
    let mut points = 0u32;

    if let Some(face) = triple_face(&counts) {
        points += if face == 1 { 1000 } else { face as u32 * 100 };
        counts[face] -= 3;
    }

    points + counts[1] as u32 * 100 + counts[5] as u32 * 50
}

/// Number of dice in a roll that contribute no points.
///
/// These are the dice a player re-rolls; zero means hot dice.
///
/// ```
/// use greed::rules::non_scoring_dice;
///
/// assert_eq!(non_scoring_dice(&[2, 2, 2, 2, 2]), 2);
/// assert_eq!(non_scoring_dice(&[1, 5, 3, 3, 3]), 0);
/// ```
#[must_use]
pub fn non_scoring_dice(dice: &[u8]) -> usize {
    let mut counts = face_counts(dice);

    if let Some(face) = triple_face(&counts) {
        counts[face] -= 3;
    }

    (1..counts.len())
        .filter(|&face| face != 1 && face != 5)
        .map(|face| counts[face])
        .sum()
}
