//! Resolver configuration.

use crate::dice::ROLL_CAP;
use crate::random::ReseedPolicy;

/// Limits and policies applied by the [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Largest attribute (dice count) a check may roll.
    pub max_attribute: u32,
    /// Largest repetition count a skill check accepts.
    pub max_repetitions: u32,
    /// Most rolls a single exploding die may make.
    pub roll_cap: usize,
    /// When to draw a fresh random source.
    pub reseed: ReseedPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_attribute: 10,
            max_repetitions: 10,
            roll_cap: ROLL_CAP,
            reseed: ReseedPolicy::PerRepetition,
        }
    }
}

impl ResolverConfig {
    /// Set the attribute cap.
    pub fn with_max_attribute(mut self, max: u32) -> Self {
        self.max_attribute = max;
        self
    }

    /// Set the repetition cap (at least 1).
    pub fn with_max_repetitions(mut self, max: u32) -> Self {
        self.max_repetitions = max.max(1);
        self
    }

    /// Set the per-die roll cap (at least 2).
    pub fn with_roll_cap(mut self, cap: usize) -> Self {
        self.roll_cap = cap.max(2);
        self
    }

    /// Set the reseed policy.
    pub fn with_reseed(mut self, reseed: ReseedPolicy) -> Self {
        self.reseed = reseed;
        self
    }

    /// Clamp a requested attribute into `0..=max_attribute`.
    pub fn clamp_attribute(&self, attribute: i64) -> u32 {
        attribute.clamp(0, i64::from(self.max_attribute)) as u32
    }

    /// Repetitions outside `1..=max_repetitions` fall back to 1.
    pub fn clamp_repetitions(&self, repetitions: Option<i64>) -> u32 {
        match repetitions {
            Some(n) if (1..=i64::from(self.max_repetitions)).contains(&n) => n as u32,
            _ => 1,
        }
    }
}
