//! Check resolution engine for Atomic Highway.
//!
//! Rolls pools of exploding six-sided dice, spends skill points to push
//! results toward a six, and counts successes. Everything here is a pure,
//! synchronous computation over an injected [`RandomSource`].

pub mod config;
pub mod dice;
pub mod error;
pub mod random;
pub mod resolver;
pub mod skill;
pub mod success;

pub use config::ResolverConfig;
pub use dice::{DieRoll, MAX_FACE, PoolRoll, ROLL_CAP, roll_die, roll_pool};
pub use error::{DiceError, DiceResult};
pub use random::{
    EntropyFactory, RandomSource, ReseedPolicy, ScriptedSource, SeededFactory, SourceFactory,
};
pub use resolver::{CheckMode, CheckOutcome, CheckRequest, Resolver, SkillApplication};
pub use skill::{SkillRoll, apply_skill};
pub use success::count_successes;
