//! Random face sources and the factories that hand them out.
//!
//! The engine never reaches for a global generator. Every roll draws from a
//! [`RandomSource`], and multi-repetition checks ask a [`SourceFactory`] for
//! new sources according to the configured [`ReseedPolicy`].

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::dice::MAX_FACE;
use crate::error::{DiceError, DiceResult};

/// Supplies uniformly distributed d6 faces.
pub trait RandomSource {
    /// Returns the next face, always in `1..=6`.
    fn next_face(&mut self) -> u8;
}

impl<R: RngCore> RandomSource for R {
    fn next_face(&mut self) -> u8 {
        self.random_range(1..=MAX_FACE)
    }
}

/// A deterministic source that replays a fixed list of faces.
///
/// The script cycles once exhausted, and an empty script always yields 1.
/// Out-of-range entries are clamped into `1..=6`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `faces` in order.
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }

    /// How many faces have been drawn so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_face(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, MAX_FACE)
    }
}

/// Produces fresh random sources on demand.
pub trait SourceFactory {
    /// The kind of source this factory hands out.
    type Source: RandomSource;

    /// Create a new, independently seeded source.
    fn fresh(&mut self) -> Self::Source;
}

impl<F, S> SourceFactory for F
where
    F: FnMut() -> S,
    S: RandomSource,
{
    type Source = S;

    fn fresh(&mut self) -> S {
        self()
    }
}

/// Seeds every new source from the thread-local entropy generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyFactory;

impl SourceFactory for EntropyFactory {
    type Source = StdRng;

    fn fresh(&mut self) -> StdRng {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Hands out reproducible sources: the n-th source is seeded with `base + n`.
#[derive(Debug, Clone)]
pub struct SeededFactory {
    base: u64,
    issued: u64,
}

impl SeededFactory {
    /// Create a factory whose first source is seeded with `base`.
    pub fn new(base: u64) -> Self {
        Self { base, issued: 0 }
    }
}

impl SourceFactory for SeededFactory {
    type Source = StdRng;

    fn fresh(&mut self) -> StdRng {
        let seed = self.base.wrapping_add(self.issued);
        self.issued += 1;
        StdRng::seed_from_u64(seed)
    }
}

/// When the resolver asks its factory for a new source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReseedPolicy {
    /// A fresh source for every repetition of a check.
    #[default]
    PerRepetition,
    /// One source shared by all repetitions of a request.
    Once,
}

impl ReseedPolicy {
    /// Parse a policy name such as `per-repetition` or `once`.
    pub fn parse(s: &str) -> DiceResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "per-repetition" | "per_repetition" | "each" => Ok(Self::PerRepetition),
            "once" => Ok(Self::Once),
            other => Err(DiceError::UnknownReseedPolicy(other.to_string())),
        }
    }
}

impl std::str::FromStr for ReseedPolicy {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ReseedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerRepetition => write!(f, "per-repetition"),
            Self::Once => write!(f, "once"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_replays_and_cycles() {
        let mut source = ScriptedSource::new(vec![6, 2]);
        let faces: Vec<u8> = (0..5).map(|_| source.next_face()).collect();
        assert_eq!(faces, vec![6, 2, 6, 2, 6]);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn empty_script_yields_one() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.next_face(), 1);
        assert_eq!(source.next_face(), 1);
    }

    #[test]
    fn scripted_faces_are_clamped() {
        let mut source = ScriptedSource::new(vec![0, 9]);
        assert_eq!(source.next_face(), 1);
        assert_eq!(source.next_face(), 6);
    }

    #[test]
    fn std_rng_faces_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!((1..=6).contains(&rng.next_face()));
        }
    }

    #[test]
    fn seeded_factory_is_reproducible() {
        let mut a = SeededFactory::new(99);
        let mut b = SeededFactory::new(99);
        for _ in 0..3 {
            let mut ra = a.fresh();
            let mut rb = b.fresh();
            let fa: Vec<u8> = (0..10).map(|_| ra.next_face()).collect();
            let fb: Vec<u8> = (0..10).map(|_| rb.next_face()).collect();
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn seeded_factory_advances_seed() {
        let mut factory = SeededFactory::new(1);
        let mut first = factory.fresh();
        let mut second = factory.fresh();
        let f1: Vec<u8> = (0..20).map(|_| first.next_face()).collect();
        let f2: Vec<u8> = (0..20).map(|_| second.next_face()).collect();
        assert_ne!(f1, f2);
    }

    #[test]
    fn closure_is_a_factory() {
        let mut calls = 0;
        let mut factory = || {
            calls += 1;
            ScriptedSource::new(vec![4])
        };
        assert_eq!(factory.fresh().next_face(), 4);
        assert_eq!(factory.fresh().next_face(), 4);
        assert_eq!(calls, 2);
    }

    #[test]
    fn entropy_factory_faces_in_range() {
        let mut source = EntropyFactory.fresh();
        for _ in 0..100 {
            assert!((1..=6).contains(&source.next_face()));
        }
    }

    #[test]
    fn reseed_policy_parse() {
        assert_eq!(
            ReseedPolicy::parse("per-repetition").unwrap(),
            ReseedPolicy::PerRepetition
        );
        assert_eq!(ReseedPolicy::parse(" ONCE ").unwrap(), ReseedPolicy::Once);
        assert!(ReseedPolicy::parse("sometimes").is_err());
        assert_eq!("once".parse::<ReseedPolicy>().unwrap(), ReseedPolicy::Once);
    }

    #[test]
    fn reseed_policy_display_roundtrips() {
        for policy in [ReseedPolicy::PerRepetition, ReseedPolicy::Once] {
            assert_eq!(ReseedPolicy::parse(&policy.to_string()).unwrap(), policy);
        }
        assert_eq!(ReseedPolicy::default(), ReseedPolicy::PerRepetition);
    }
}
