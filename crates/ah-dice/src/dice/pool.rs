//! Rolling a pool of exploding dice.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::{DieRoll, roll_die};
use crate::random::RandomSource;

/// The aggregated result of rolling several exploding dice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    /// One natural result per die, highest first.
    pub natural: Vec<u8>,
    /// Every die's bonus chain concatenated, highest first.
    pub bonus: Vec<u8>,
}

impl PoolRoll {
    /// Build a pool from individual die rolls, sorting both result lists.
    pub fn from_dice(dice: impl IntoIterator<Item = DieRoll>) -> Self {
        let mut pool = Self::default();
        for die in dice {
            pool.natural.push(die.natural);
            pool.bonus.extend(die.bonus);
        }
        sort_descending(&mut pool.natural);
        sort_descending(&mut pool.bonus);
        pool
    }

    /// Number of dice rolled.
    pub fn dice_count(&self) -> usize {
        self.natural.len()
    }

    /// Returns true if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.natural.is_empty()
    }
}

/// Roll `count` independent exploding dice.
///
/// `cap` bounds the rolls made by each die, see [`roll_die`].
pub fn roll_pool<S: RandomSource + ?Sized>(count: u32, source: &mut S, cap: usize) -> PoolRoll {
    PoolRoll::from_dice((0..count).map(|_| roll_die(source, cap)))
}

fn sort_descending(faces: &mut [u8]) {
    faces.sort_unstable_by_key(|&face| Reverse(face));
}
