//! Test suite for the Yahtzee hold planner
//! Checks enumeration sizes, scoring rules and expected values against brute force

use gameplan::{
    Error,
    yahtzee::{
        ScoreCache, choose_strategy, expected_value, gen_all_holds, gen_all_sequences, score_hand,
    },
};

const EPSILON: f64 = 1e-9;

/// Mean score of `hold` plus every ordered roll of `free` dice, by nested recursion.
fn brute_force_expected(hold: &[u32], sides: u32, free: usize) -> f64 {
    fn walk(hand: &mut Vec<u32>, sides: u32, free: usize, total: &mut f64, count: &mut usize) {
        if free == 0 {
            *total += score_hand(hand).unwrap() as f64;
            *count += 1;
            return;
        }
        for face in 1..=sides {
            hand.push(face);
            walk(hand, sides, free - 1, total, count);
            hand.pop();
        }
    }

    let mut hand = hold.to_vec();
    let (mut total, mut count) = (0.0, 0);
    walk(&mut hand, sides, free, &mut total, &mut count);
    total / count as f64
}

mod enumeration {
    use super::*;

    #[test]
    fn test_sequence_counts_are_powers() {
        assert_eq!(gen_all_sequences(&[1, 2], 3).len(), 8);
        for length in 0..=4 {
            let sequences = gen_all_sequences(&[1, 2, 3, 4, 5, 6], length);
            assert_eq!(sequences.len(), 6usize.pow(length as u32));
        }
    }

    #[test]
    fn test_zero_length_sequence() {
        assert_eq!(gen_all_sequences(&[4, 5], 0), vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_hold_counts() {
        assert_eq!(gen_all_holds(&[1, 2, 3]).len(), 8);
        assert_eq!(gen_all_holds(&[1, 2, 3, 4, 5]).len(), 32);
        // Five equal dice can only be held 0..=5 at a time.
        assert_eq!(gen_all_holds(&[4, 4, 4, 4, 4]).len(), 6);
    }

    #[test]
    fn test_every_hold_is_a_sub_multiset() {
        let hand = [3, 1, 3, 6];
        for hold in gen_all_holds(&hand) {
            let mut remaining = hand.to_vec();
            for die in &hold {
                let pos = remaining
                    .iter()
                    .position(|d| d == die)
                    .unwrap_or_else(|| panic!("{hold:?} is not part of {hand:?}"));
                remaining.swap_remove(pos);
            }
        }
    }
}

mod scoring {
    use super::*;

    #[test]
    fn test_known_scores() {
        assert_eq!(score_hand(&[2, 2, 3]).unwrap(), 4);
        assert_eq!(score_hand(&[5, 5, 5]).unwrap(), 15);
        assert_eq!(score_hand(&[1, 1, 1, 1, 6]).unwrap(), 6);
        assert_eq!(score_hand(&[3, 3, 4, 4, 4]).unwrap(), 12);
    }

    #[test]
    fn test_empty_hand_rejected() {
        assert!(matches!(score_hand(&[]), Err(Error::EmptyHand)));
    }

    #[test]
    fn test_large_faces_do_not_overflow() {
        assert_eq!(score_hand(&[u32::MAX, u32::MAX]).unwrap(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_cache_is_order_insensitive() {
        let mut cache = ScoreCache::new();
        assert_eq!(cache.score(&[6, 2, 6]).unwrap(), 12);
        assert_eq!(cache.score(&[2, 6, 6]).unwrap(), 12);
        assert_eq!(cache.len(), 1);
    }
}

mod expected_values {
    use super::*;

    #[test]
    fn test_two_free_dice_match_36_roll_brute_force() {
        let mut total = 0.0;
        for a in 1..=6 {
            for b in 1..=6 {
                total += score_hand(&[a, b]).unwrap() as f64;
            }
        }
        let value = expected_value(&[], 6, 2).unwrap();
        assert!((value - total / 36.0).abs() < EPSILON, "got {value}");
        assert!((value - 182.0 / 36.0).abs() < EPSILON, "got {value}");
    }

    #[test]
    fn test_no_free_dice_is_exact_score() {
        assert_eq!(expected_value(&[4, 4, 1], 6, 0).unwrap(), 8.0);
    }

    #[test]
    fn test_matches_recursive_brute_force() {
        for (hold, sides, free) in [(&[1u32, 1][..], 6, 2), (&[3][..], 4, 3), (&[][..], 3, 4)] {
            let value = expected_value(hold, sides, free).unwrap();
            let brute = brute_force_expected(hold, sides, free);
            assert!(
                (value - brute).abs() < EPSILON,
                "hold {hold:?} sides {sides} free {free}: {value} vs {brute}"
            );
        }
    }
}

mod strategy {
    use super::*;

    #[test]
    fn test_two_dice_hand_matches_brute_force_over_all_holds() {
        let hand = [2, 3];
        let candidates: [&[u32]; 4] = [&[], &[2], &[3], &[2, 3]];
        let best = candidates
            .iter()
            .map(|hold| brute_force_expected(hold, 6, hand.len() - hold.len()))
            .fold(f64::NEG_INFINITY, f64::max);

        let strategy = choose_strategy(&hand, 6).unwrap();
        assert!(
            (strategy.expected_score - best).abs() < EPSILON,
            "got {} expected {best}",
            strategy.expected_score
        );
        // Rerolling both dice (EV 182/36) beats keeping the 3 (EV 4.5).
        assert_eq!(strategy.hold, Vec::<u32>::new());
        let held_ev = brute_force_expected(&strategy.hold, 6, hand.len() - strategy.hold.len());
        assert!((held_ev - strategy.expected_score).abs() < EPSILON);
    }

    #[test]
    fn test_high_pair_is_kept() {
        let strategy = choose_strategy(&[6, 6, 1], 6).unwrap();
        assert_eq!(strategy.hold, vec![6, 6]);
        assert!(strategy.tied_holds.iter().all(|h| h == &vec![6, 6]));
    }

    #[test]
    fn test_tied_holds_share_the_maximum() {
        let strategy = choose_strategy(&[1, 1], 1).unwrap();
        assert_eq!(strategy.tied_holds.len(), 3);
        for hold in &strategy.tied_holds {
            let ev = expected_value(hold, 1, 2 - hold.len()).unwrap();
            assert_eq!(ev, strategy.expected_score);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(choose_strategy(&[], 6), Err(Error::EmptyHand)));
        assert!(matches!(choose_strategy(&[2], 0), Err(Error::InvalidDieSides)));
        assert!(matches!(
            choose_strategy(&[7, 1], 6),
            Err(Error::InvalidDieFace { face: 7, sides: 6 })
        ));
    }
}
