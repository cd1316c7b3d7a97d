//! Spending skill points on a rolled pool.
//!
//! Points are spent greedily on the natural results in descending order:
//! each die is topped up to a six while the budget covers its gap, and the
//! first die the budget cannot fully cover takes whatever is left. Dice after
//! that keep their natural value, so the boosted list stays non-increasing.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::dice::{MAX_FACE, PoolRoll};

/// A pool roll together with its skill-boosted results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRoll {
    /// The underlying pool roll.
    pub pool: PoolRoll,
    /// Skill points as requested.
    pub points: i64,
    /// Natural results after spending points, aligned with `pool.natural`.
    pub boosted: Vec<u8>,
}

/// Apply `points` to the natural results of `pool`.
///
/// Zero or negative points leave every result unchanged.
pub fn apply_skill(pool: PoolRoll, points: i64) -> SkillRoll {
    let mut natural = pool.natural.clone();
    natural.sort_unstable_by_key(|&face| Reverse(face));

    let mut remaining = points.max(0) as u64;
    let boosted = natural
        .iter()
        .map(|&face| {
            if face >= MAX_FACE {
                return face;
            }
            let deficit = u64::from(MAX_FACE - face);
            if deficit <= remaining {
                remaining -= deficit;
                MAX_FACE
            } else {
                // remaining < deficit <= 5, so this stays below a six
                let raised = face + remaining as u8;
                remaining = 0;
                raised
            }
        })
        .collect();

    SkillRoll {
        pool,
        points,
        boosted,
    }
}

/// Points needed to turn every result in `natural` into a six.
pub fn full_boost_cost(natural: &[u8]) -> u64 {
    natural
        .iter()
        .map(|&face| u64::from(MAX_FACE.saturating_sub(face)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(natural: &[u8]) -> PoolRoll {
        PoolRoll {
            natural: natural.to_vec(),
            bonus: Vec::new(),
        }
    }

    #[test]
    fn closes_smallest_gaps_first() {
        let roll = apply_skill(pool(&[5, 3, 2]), 4);
        assert_eq!(roll.boosted, vec![6, 6, 2]);
    }

    #[test]
    fn partial_spend_on_first_uncovered_die() {
        let roll = apply_skill(pool(&[4, 3, 1]), 3);
        // 4 -> 6 costs 2, leaving 1 for the 3
        assert_eq!(roll.boosted, vec![6, 4, 1]);
    }

    #[test]
    fn sixes_cost_nothing() {
        let roll = apply_skill(pool(&[6, 6, 5]), 1);
        assert_eq!(roll.boosted, vec![6, 6, 6]);
    }

    #[test]
    fn not_largest_gap_first() {
        let roll = apply_skill(pool(&[5, 1]), 5);
        assert_eq!(roll.boosted, vec![6, 5]);
    }

    #[test]
    fn zero_points_is_noop() {
        let roll = apply_skill(pool(&[5, 3, 2]), 0);
        assert_eq!(roll.boosted, vec![5, 3, 2]);
    }

    #[test]
    fn negative_points_is_noop() {
        let roll = apply_skill(pool(&[5, 3, 2]), -4);
        assert_eq!(roll.boosted, vec![5, 3, 2]);
        assert_eq!(roll.points, -4);
    }

    #[test]
    fn empty_pool() {
        let roll = apply_skill(PoolRoll::default(), 10);
        assert!(roll.boosted.is_empty());
    }

    #[test]
    fn cost_of_full_boost() {
        assert_eq!(full_boost_cost(&[5, 3, 2]), 8);
        assert_eq!(full_boost_cost(&[6, 6]), 0);
        assert_eq!(full_boost_cost(&[]), 0);
    }

    fn sorted_faces() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(1u8..=6, 0..12).prop_map(|mut faces| {
            faces.sort_unstable_by_key(|&face| Reverse(face));
            faces
        })
    }

    proptest! {
        #[test]
        fn boosted_is_non_increasing_and_bounded(natural in sorted_faces(), points in -5i64..40) {
            let roll = apply_skill(pool(&natural), points);
            prop_assert_eq!(roll.boosted.len(), natural.len());
            for window in roll.boosted.windows(2) {
                prop_assert!(window[0] >= window[1]);
            }
            for (boosted, original) in roll.boosted.iter().zip(&natural) {
                prop_assert!(boosted >= original);
                prop_assert!(*boosted <= MAX_FACE);
            }
        }

        #[test]
        fn enough_points_boosts_everything(natural in sorted_faces(), extra in 0i64..10) {
            let points = full_boost_cost(&natural) as i64 + extra;
            let roll = apply_skill(pool(&natural), points);
            prop_assert!(roll.boosted.iter().all(|&face| face == MAX_FACE));
        }

        #[test]
        fn zero_points_changes_nothing(natural in sorted_faces()) {
            let roll = apply_skill(pool(&natural), 0);
            prop_assert_eq!(roll.boosted, natural);
        }
    }
}
