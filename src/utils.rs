//! Utility functions shared by the Tic-Tac-Toe advisor and the Yahtzee planner

use rand::{Rng, prelude::IndexedRandom};

/// Find the maximum value and every item that attains it.
///
/// Items are scanned once, in order, so the returned candidates keep their
/// input order. Ties are detected with exact equality. Values that compare
/// unordered with the running maximum (NaN) are skipped.
///
/// # Returns
///
/// - `Some((max, candidates))` with at least one candidate
/// - `None` if `items` is empty or every value is NaN
///
/// # Examples
///
/// ```
/// use gameplan::utils::max_candidates;
///
/// let best = max_candidates(vec![("a", 1.0), ("b", 3.0), ("c", 3.0)]);
/// assert_eq!(best, Some((3.0, vec!["b", "c"])));
/// ```
pub fn max_candidates<T, I>(items: I) -> Option<(f64, Vec<T>)>
where
    I: IntoIterator<Item = (T, f64)>,
{
    let mut best: Option<(f64, Vec<T>)> = None;

    for (item, value) in items {
        if value.is_nan() {
            continue;
        }
        match &mut best {
            Some((best_value, candidates)) if value == *best_value => candidates.push(item),
            Some((best_value, _)) if value < *best_value => {}
            _ => best = Some((value, vec![item])),
        }
    }

    best
}

/// Pick one item uniformly at random.
///
/// Returns `None` if the slice is empty.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use gameplan::utils::choose_uniform;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let picked = choose_uniform(&mut rng, &[(0, 1), (2, 2)]);
/// assert!(picked.is_some());
/// ```
pub fn choose_uniform<R, T>(rng: &mut R, items: &[T]) -> Option<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    items.choose(rng).cloned()
}
