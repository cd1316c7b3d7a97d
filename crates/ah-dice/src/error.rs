//! Error types for the dice engine.
//!
//! Rolling and resolving never fail; these errors only come from parsing
//! configuration values supplied by a user.

/// Errors raised while interpreting engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A reseed policy name was not recognised.
    #[error("unknown reseed policy: {0} (expected 'per-repetition' or 'once')")]
    UnknownReseedPolicy(String),
}

/// Convenience result type for engine configuration.
pub type DiceResult<T> = Result<T, DiceError>;
