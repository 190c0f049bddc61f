//! Expected values of holds and the best-hold search

use serde::{Deserialize, Serialize};

use super::{
    enumerate::{gen_all_holds, gen_all_sequences},
    scoring::ScoreCache,
};
use crate::{Error, Result, utils::max_candidates};

/// Best hold found for a hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// The hand that was analysed
    pub hand: Vec<u32>,
    /// Number of sides on each die
    pub num_die_sides: u32,
    /// Expected score after rerolling the dice not held
    pub expected_score: f64,
    /// Dice to keep, sorted ascending
    pub hold: Vec<u32>,
    /// Every hold reaching `expected_score`, in ascending order; `hold` is the first
    pub tied_holds: Vec<Vec<u32>>,
}

fn validate_dice(dice: &[u32], num_die_sides: u32) -> Result<()> {
    if num_die_sides == 0 {
        return Err(Error::InvalidDieSides);
    }
    match dice.iter().find(|&&face| face == 0 || face > num_die_sides) {
        Some(&face) => Err(Error::InvalidDieFace {
            face,
            sides: num_die_sides,
        }),
        None => Ok(()),
    }
}

fn expected_value_cached(
    held_dice: &[u32],
    num_die_sides: u32,
    num_free_dice: usize,
    cache: &mut ScoreCache,
) -> Result<f64> {
    if num_free_dice == 0 {
        return Ok(cache.score(held_dice)? as f64);
    }
    let faces: Vec<u32> = (1..=num_die_sides).collect();
    let rolls = gen_all_sequences(&faces, num_free_dice);

    let mut hand = Vec::with_capacity(held_dice.len() + num_free_dice);
    let mut total = 0.0;
    for roll in &rolls {
        hand.clear();
        hand.extend_from_slice(held_dice);
        hand.extend_from_slice(roll);
        total += cache.score(&hand)? as f64;
    }
    Ok(total / rolls.len() as f64)
}

/// Mean score of `held_dice` plus `num_free_dice` fresh dice.
///
/// Every ordered roll of the free dice is enumerated and weighted equally.
/// With no free dice this is exactly the score of the held dice.
///
/// # Errors
///
/// Returns an error if `num_die_sides` is zero, a held die is outside
/// `1..=num_die_sides`, or the combined hand would be empty.
///
/// # Examples
///
/// ```
/// use gameplan::yahtzee::expected_value;
///
/// // One fair die: (1 + 2 + 3 + 4 + 5 + 6) / 6
/// assert_eq!(expected_value(&[], 6, 1).unwrap(), 3.5);
/// ```
pub fn expected_value(held_dice: &[u32], num_die_sides: u32, num_free_dice: usize) -> Result<f64> {
    validate_dice(held_dice, num_die_sides)?;
    expected_value_cached(held_dice, num_die_sides, num_free_dice, &mut ScoreCache::new())
}

/// Find the hold with the highest expected score for `hand`.
///
/// Every hold from [`gen_all_holds`] is evaluated with the remaining dice
/// rerolled. All holds sharing the maximum are reported in `tied_holds`.
///
/// # Errors
///
/// Returns an error if `num_die_sides` is zero, a die is outside
/// `1..=num_die_sides`, or the hand is empty.
pub fn choose_strategy(hand: &[u32], num_die_sides: u32) -> Result<Strategy> {
    validate_dice(hand, num_die_sides)?;

    let mut cache = ScoreCache::new();
    let mut evaluated = Vec::new();
    for hold in gen_all_holds(hand) {
        let free = hand.len() - hold.len();
        let value = expected_value_cached(&hold, num_die_sides, free, &mut cache)?;
        log::trace!("hold {hold:?} rerolling {free}: {value:.4}");
        evaluated.push((hold, value));
    }

    let (expected_score, tied_holds) = max_candidates(evaluated).ok_or(Error::EmptyHand)?;
    let hold = tied_holds.first().cloned().unwrap_or_default();
    log::debug!(
        "hand {hand:?}: hold {hold:?} for {expected_score:.4} ({} tied, {} hands scored)",
        tied_holds.len(),
        cache.len()
    );

    Ok(Strategy {
        hand: hand.to_vec(),
        num_die_sides,
        expected_score,
        hold,
        tied_holds,
    })
}
