//! Scoring rules.
//!
//! `score` prices a roll, `non_scoring_dice` counts the dice left over for
//! the next roll. Both are pure functions over die faces.

pub mod scoring;

pub use scoring::{non_scoring_dice, score};
