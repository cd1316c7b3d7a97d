//! Check resolution: rolling, skill allocation and success counting for one
//! request, possibly repeated.
//!
//! The resolver keeps no state between calls. Randomness comes from the
//! [`SourceFactory`] passed to [`Resolver::resolve`], and the configured
//! [`ReseedPolicy`] decides whether each repetition gets its own source.

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::dice::{PoolRoll, roll_pool};
use crate::random::{RandomSource, ReseedPolicy, SourceFactory};
use crate::skill::{SkillRoll, apply_skill};
use crate::success::count_successes;

/// Which success rule applies to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// Attribute only: raw dice are reported, only bonus rolls count as successes.
    Attribute,
    /// Attribute plus skill points: bonus rolls and boosted results count.
    Skill,
}

/// Raw caller input for a check, before any clamping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    /// Number of dice to roll.
    pub attribute: i64,
    /// Skill points to spend. `None` makes this an attribute check.
    pub skill_points: Option<i64>,
    /// How many times to repeat a skill check.
    pub repetitions: Option<i64>,
}

impl CheckRequest {
    /// An attribute-only check.
    pub fn attribute(attribute: i64) -> Self {
        Self {
            attribute,
            ..Self::default()
        }
    }

    /// A skill check spending `points`.
    pub fn skill(attribute: i64, points: i64) -> Self {
        Self {
            attribute,
            skill_points: Some(points),
            repetitions: None,
        }
    }

    /// Set the repetition count.
    pub fn with_repetitions(mut self, repetitions: i64) -> Self {
        self.repetitions = Some(repetitions);
        self
    }

    /// The success rule this request selects.
    pub fn mode(&self) -> CheckMode {
        if self.skill_points.is_some() {
            CheckMode::Skill
        } else {
            CheckMode::Attribute
        }
    }
}

/// Skill points spent in one repetition and the results they produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillApplication {
    /// Skill points as requested.
    pub points: i64,
    /// Natural results after spending points, highest first.
    pub boosted: Vec<u8>,
}

/// The outcome of one repetition of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// 1-based repetition index.
    pub repetition: u32,
    /// Natural results, highest first.
    pub natural: Vec<u8>,
    /// Bonus results from exploding sixes, highest first.
    pub bonus: Vec<u8>,
    /// Present for skill checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<SkillApplication>,
    /// Number of successes under this check's success rule.
    pub successes: u32,
}

impl CheckOutcome {
    /// Outcome of an attribute check: only bonus rolls count.
    pub fn from_pool(repetition: u32, pool: PoolRoll) -> Self {
        let successes = count_successes(&pool.bonus, &[]);
        Self {
            repetition,
            natural: pool.natural,
            bonus: pool.bonus,
            skill: None,
            successes,
        }
    }

    /// Outcome of a skill check: bonus rolls and boosted results count.
    pub fn from_skill(repetition: u32, roll: SkillRoll) -> Self {
        let successes = count_successes(&roll.pool.bonus, &roll.boosted);
        Self {
            repetition,
            natural: roll.pool.natural,
            bonus: roll.pool.bonus,
            skill: Some(SkillApplication {
                points: roll.points,
                boosted: roll.boosted,
            }),
            successes,
        }
    }

    /// The success rule this outcome was counted under.
    pub fn mode(&self) -> CheckMode {
        if self.skill.is_some() {
            CheckMode::Skill
        } else {
            CheckMode::Attribute
        }
    }
}

/// Resolves checks under a fixed [`ResolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a check, returning one outcome per repetition in order.
    ///
    /// Attribute checks always roll once. Skill checks roll once per
    /// repetition; out-of-range repetition counts fall back to 1.
    pub fn resolve<F>(&self, request: &CheckRequest, factory: &mut F) -> Vec<CheckOutcome>
    where
        F: SourceFactory + ?Sized,
    {
        let dice = self.config.clamp_attribute(request.attribute);

        let Some(points) = request.skill_points else {
            let mut source = factory.fresh();
            let pool = roll_pool(dice, &mut source, self.config.roll_cap);
            let outcome = CheckOutcome::from_pool(1, pool);
            log::debug!(
                "attribute check: {dice} dice, {} bonus rolls",
                outcome.bonus.len()
            );
            return vec![outcome];
        };

        let repetitions = self.config.clamp_repetitions(request.repetitions);
        match self.config.reseed {
            ReseedPolicy::PerRepetition => (1..=repetitions)
                .map(|repetition| {
                    let mut source = factory.fresh();
                    self.skill_check(repetition, dice, points, &mut source)
                })
                .collect(),
            ReseedPolicy::Once => {
                let mut source = factory.fresh();
                (1..=repetitions)
                    .map(|repetition| self.skill_check(repetition, dice, points, &mut source))
                    .collect()
            }
        }
    }

    fn skill_check<S: RandomSource + ?Sized>(
        &self,
        repetition: u32,
        dice: u32,
        points: i64,
        source: &mut S,
    ) -> CheckOutcome {
        let pool = roll_pool(dice, source, self.config.roll_cap);
        let outcome = CheckOutcome::from_skill(repetition, apply_skill(pool, points));
        log::debug!(
            "skill check #{repetition}: {dice} dice, {points} points, {} successes",
            outcome.successes
        );
        outcome
    }
}
