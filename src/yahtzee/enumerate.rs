//! Exhaustive enumeration of roll sequences and holds

use std::collections::BTreeSet;

/// Enumerate every ordered sequence of `length` outcomes, with repetition.
///
/// Sequences are built by extending each partial sequence with every outcome,
/// one round per position. Repeated outcome values are ignored after their
/// first occurrence, so the result holds `distinct^length` sequences.
/// `length == 0` yields a single empty sequence; no outcomes and a positive
/// length yield none.
///
/// # Examples
///
/// ```
/// use gameplan::yahtzee::gen_all_sequences;
///
/// let rolls = gen_all_sequences(&[1, 2], 2);
/// assert_eq!(rolls, vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]);
/// ```
pub fn gen_all_sequences<T>(outcomes: &[T], length: usize) -> Vec<Vec<T>>
where
    T: Clone + PartialEq,
{
    let mut distinct: Vec<T> = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        if !distinct.contains(outcome) {
            distinct.push(outcome.clone());
        }
    }

    let mut sequences: Vec<Vec<T>> = vec![Vec::new()];
    for _ in 0..length {
        let mut extended = Vec::with_capacity(sequences.len() * distinct.len());
        for partial in &sequences {
            for outcome in &distinct {
                let mut next = Vec::with_capacity(partial.len() + 1);
                next.extend_from_slice(partial);
                next.push(outcome.clone());
                extended.push(next);
            }
        }
        sequences = extended;
    }
    sequences
}

/// Enumerate every hold (sub-multiset) of `hand`.
///
/// Subsets are grown one die at a time: each die is appended to a copy of
/// every subset collected so far. Each subset is then sorted, so holds with
/// the same dice values collapse into one. The result is in ascending
/// lexicographic order and always contains the empty hold and the full hand.
/// A hand of `n` distinct dice has `2^n` holds.
pub fn gen_all_holds(hand: &[u32]) -> Vec<Vec<u32>> {
    let mut subsets: Vec<Vec<u32>> = vec![Vec::new()];
    for &die in hand {
        let grown: Vec<Vec<u32>> = subsets
            .iter()
            .map(|subset| {
                let mut with_die = subset.clone();
                with_die.push(die);
                with_die
            })
            .collect();
        subsets.extend(grown);
    }

    subsets
        .into_iter()
        .map(|mut hold| {
            hold.sort_unstable();
            hold
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
