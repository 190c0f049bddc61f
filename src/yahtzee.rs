//! Hold planner for a single-roll, upper-section-only Yahtzee
//!
//! A hand is scored by its best upper-section box (`value * count`). The
//! planner enumerates every hold, averages the score over every possible
//! reroll of the remaining dice, and keeps the hold with the best mean.

pub mod enumerate;
pub mod scoring;
pub mod strategy;

pub use enumerate::{gen_all_holds, gen_all_sequences};
pub use scoring::{ScoreCache, score_hand};
pub use strategy::{Strategy, choose_strategy, expected_value};
