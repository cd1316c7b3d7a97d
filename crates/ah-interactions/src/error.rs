//! Error types for the interaction adapter.

use thiserror::Error;

/// Result type for interaction handling.
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Errors that can occur while handling an interaction request.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// A required request header was absent.
    #[error("missing header: {0}")]
    MissingHeader(&'static str),

    /// A hex-encoded field could not be decoded.
    #[error("invalid hex in {field}: {source}")]
    InvalidHex {
        /// Which field was being decoded.
        field: &'static str,
        /// The decoding failure.
        source: hex::FromHexError,
    },

    /// The request signature did not verify.
    #[error("invalid request signature")]
    BadSignature,

    /// The configured public key is unusable.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// No public key was configured.
    #[error("no public key configured (set {})", crate::config::PUBLIC_KEY_VAR)]
    MissingPublicKey,

    /// The request body is not a valid interaction.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A command interaction carried no command data.
    #[error("interaction has no command data")]
    MissingData,

    /// A required command option was absent.
    #[error("missing command option: {0}")]
    MissingOption(&'static str),

    /// A command option was not an integer.
    #[error("command option '{0}' must be an integer")]
    InvalidOption(&'static str),

    /// The response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(serde_json::Error),

    /// Engine configuration error.
    #[error("{0}")]
    Dice(#[from] ah_dice::DiceError),
}

impl InteractionError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingHeader(_) | Self::InvalidHex { .. } | Self::BadSignature => 401,
            Self::MalformedBody(_)
            | Self::MissingData
            | Self::MissingOption(_)
            | Self::InvalidOption(_) => 400,
            Self::InvalidPublicKey(_) | Self::MissingPublicKey | Self::Encode(_) | Self::Dice(_) => {
                500
            }
        }
    }
}
