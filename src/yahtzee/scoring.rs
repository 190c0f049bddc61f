//! Upper-section scoring of a dice hand

use std::collections::{BTreeMap, HashMap};

use crate::{Error, Result};

/// Best single upper-section score for `hand`: the largest `value * count`.
///
/// Scores are widened to `u64` so any `u32` face value is safe to multiply.
///
/// # Errors
///
/// Returns [`Error::EmptyHand`] for an empty hand.
///
/// # Examples
///
/// ```
/// use gameplan::yahtzee::score_hand;
///
/// assert_eq!(score_hand(&[2, 2, 3]).unwrap(), 4);
/// assert_eq!(score_hand(&[5, 5, 5]).unwrap(), 15);
/// ```
pub fn score_hand(hand: &[u32]) -> Result<u64> {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for &die in hand {
        *counts.entry(die).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| u64::from(value) * count)
        .max()
        .ok_or(Error::EmptyHand)
}

/// Memo of [`score_hand`] keyed by the sorted hand.
///
/// Rolls that differ only in dice order score the same, so an expected-value
/// sweep over `sides^n` ordered rolls only scores each multiset once.
#[derive(Debug, Default)]
pub struct ScoreCache {
    scores: HashMap<Vec<u32>, u64>,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `hand`, reusing an earlier result for the same multiset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHand`] for an empty hand.
    pub fn score(&mut self, hand: &[u32]) -> Result<u64> {
        let mut key = hand.to_vec();
        key.sort_unstable();
        if let Some(&score) = self.scores.get(&key) {
            return Ok(score);
        }
        let score = score_hand(&key)?;
        self.scores.insert(key, score);
        Ok(score)
    }

    /// Number of distinct multisets scored so far
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
