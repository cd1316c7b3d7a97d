//! Exploding d6 rolls.
//!
//! A die that lands on six is rolled again, and every extra roll is kept as
//! a bonus result. The chain ends with the first non-six, which is also kept,
//! or when the per-die roll cap is reached.

pub mod pool;

pub use pool::{PoolRoll, roll_pool};

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// The highest face of a d6, and the only face that counts as a success.
pub const MAX_FACE: u8 = 6;

/// Default limit on the total number of rolls a single die may make.
pub const ROLL_CAP: usize = 100;

/// The result of rolling a single exploding die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    /// The first roll of the die.
    pub natural: u8,
    /// Rolls made because the previous roll was a six, in roll order.
    /// Empty unless `natural` is a six.
    pub bonus: Vec<u8>,
}

impl DieRoll {
    /// Returns true if the natural result triggered a bonus chain.
    pub fn exploded(&self) -> bool {
        !self.bonus.is_empty()
    }

    /// Total number of rolls this die made.
    pub fn rolls(&self) -> usize {
        1 + self.bonus.len()
    }
}

/// Roll one exploding die, making at most `cap` rolls in total.
///
/// A cap below 2 is raised to 2 so a natural six always gets its bonus roll.
/// Hitting the cap truncates the chain silently.
pub fn roll_die<S: RandomSource + ?Sized>(source: &mut S, cap: usize) -> DieRoll {
    let cap = cap.max(2);
    let natural = source.next_face();
    let mut bonus = Vec::new();
    let mut last = natural;

    while last == MAX_FACE {
        if 1 + bonus.len() >= cap {
            log::debug!("exploding chain truncated after {cap} rolls");
            break;
        }
        last = source.next_face();
        bonus.push(last);
    }

    DieRoll { natural, bonus }
}
