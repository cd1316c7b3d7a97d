//! Adapter configuration.

use ah_dice::{ResolverConfig, ReseedPolicy};

use crate::error::{InteractionError, InteractionResult};
use crate::verify::Ed25519Verifier;

/// Environment variable holding the application's hex public key.
pub const PUBLIC_KEY_VAR: &str = "DISCORD_PUBLIC_KEY";

/// Environment variable selecting the reseed policy.
pub const RESEED_VAR: &str = "AH_RESEED";

/// Configuration for an [`InteractionHandler`](crate::InteractionHandler).
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    /// Hex-encoded Ed25519 public key used to verify requests.
    pub public_key: String,
    /// Engine limits and policies.
    pub resolver: ResolverConfig,
}

impl InteractionConfig {
    /// Create a config with the default resolver settings.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            resolver: ResolverConfig::default(),
        }
    }

    /// Replace the resolver settings.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Read the config from the process environment.
    pub fn from_env() -> InteractionResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> InteractionResult<Self> {
        let public_key = lookup(PUBLIC_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(InteractionError::MissingPublicKey)?;

        let mut resolver = ResolverConfig::default();
        if let Some(policy) = lookup(RESEED_VAR) {
            resolver = resolver.with_reseed(ReseedPolicy::parse(&policy)?);
        }

        Ok(Self::new(public_key).with_resolver(resolver))
    }

    /// Build the verifier for the configured key.
    pub fn verifier(&self) -> InteractionResult<Ed25519Verifier> {
        Ed25519Verifier::from_hex(&self.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::test_support::public_key_hex;

    #[test]
    fn requires_public_key() {
        let err = InteractionConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, InteractionError::MissingPublicKey));

        let err = InteractionConfig::from_lookup(|_| Some("  ".to_string())).unwrap_err();
        assert!(matches!(err, InteractionError::MissingPublicKey));
    }

    #[test]
    fn reads_key_and_policy() {
        let key = public_key_hex();
        let cfg = InteractionConfig::from_lookup(|name| match name {
            PUBLIC_KEY_VAR => Some(key.clone()),
            RESEED_VAR => Some("once".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.public_key, key);
        assert_eq!(cfg.resolver.reseed, ReseedPolicy::Once);
        assert!(cfg.verifier().is_ok());
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = InteractionConfig::from_lookup(|name| match name {
            PUBLIC_KEY_VAR => Some("00".to_string()),
            _ => Some("sometimes".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, InteractionError::Dice(_)));
    }

    #[test]
    fn defaults_to_per_repetition() {
        let cfg = InteractionConfig::new("00");
        assert_eq!(cfg.resolver.reseed, ReseedPolicy::PerRepetition);
        assert!(cfg.verifier().is_err());
    }
}
