//! Success counting.
//!
//! A success is any result showing a six. Which results are counted depends
//! on the check: attribute checks count only the bonus rolls, skill checks
//! count the bonus rolls plus the skill-boosted results.

use crate::dice::MAX_FACE;

/// Count sixes across `bonus` followed by `results`.
pub fn count_successes(bonus: &[u8], results: &[u8]) -> u32 {
    bonus
        .iter()
        .chain(results)
        .filter(|&&face| face == MAX_FACE)
        .count() as u32
}
