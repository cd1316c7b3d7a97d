//! Ed25519 request verification.
//!
//! Discord signs `timestamp || body` with the application's key and sends the
//! hex signature and timestamp in request headers.

use ed25519_dalek::{PUBLIC_KEY_LENGTH, Signature, Verifier, VerifyingKey};

use crate::error::{InteractionError, InteractionResult};

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the signed timestamp.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Checks that a request body was signed by the expected party.
pub trait SignatureVerifier {
    /// Verify `signature_hex` over `timestamp` followed by `body`.
    fn verify(&self, timestamp: &str, body: &str, signature_hex: &str) -> InteractionResult<()>;
}

/// Verifies signatures against a single Ed25519 public key.
#[derive(Debug, Clone)]
pub struct Ed25519Verifier {
    key: VerifyingKey,
}

impl Ed25519Verifier {
    /// Build a verifier from an already decoded key.
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Build a verifier from a hex-encoded 32-byte public key.
    pub fn from_hex(public_key: &str) -> InteractionResult<Self> {
        let raw = hex::decode(public_key.trim())
            .map_err(|e| InteractionError::InvalidPublicKey(e.to_string()))?;
        let bytes = <[u8; PUBLIC_KEY_LENGTH]>::try_from(raw.as_slice()).map_err(|_| {
            InteractionError::InvalidPublicKey(format!(
                "expected {PUBLIC_KEY_LENGTH} bytes, got {}",
                raw.len()
            ))
        })?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| InteractionError::InvalidPublicKey(e.to_string()))?;
        Ok(Self::new(key))
    }
}

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, timestamp: &str, body: &str, signature_hex: &str) -> InteractionResult<()> {
        let raw = hex::decode(signature_hex.trim()).map_err(|source| {
            InteractionError::InvalidHex {
                field: "signature",
                source,
            }
        })?;
        let signature =
            Signature::from_slice(&raw).map_err(|_| InteractionError::BadSignature)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body.as_bytes());

        self.key
            .verify(&message, &signature)
            .map_err(|_| InteractionError::BadSignature)
    }
}
