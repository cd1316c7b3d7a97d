//! Request handling: verify, dispatch, resolve, reply.

use ah_dice::{Resolver, ResolverConfig, SourceFactory};

use crate::command::parse_check;
use crate::config::InteractionConfig;
use crate::error::{InteractionError, InteractionResult};
use crate::payload::{Interaction, InteractionReply};
use crate::render::render_outcomes;
use crate::verify::{Ed25519Verifier, SIGNATURE_HEADER, SignatureVerifier, TIMESTAMP_HEADER};

/// An inbound HTTP request, reduced to what the adapter needs.
#[derive(Debug, Clone, Default)]
pub struct InteractionRequest {
    /// Request headers as received.
    pub headers: Vec<(String, String)>,
    /// Raw request body.
    pub body: String,
}

impl InteractionRequest {
    /// Create a request with the given body and no headers.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An outbound HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value for the `content-type` header.
    pub content_type: &'static str,
    /// Response body.
    pub body: String,
}

impl InteractionResponse {
    /// A 200 response carrying `reply` as JSON.
    pub fn reply(reply: &InteractionReply) -> Self {
        match serde_json::to_string(reply) {
            Ok(body) => Self {
                status: 200,
                content_type: "application/json",
                body,
            },
            Err(err) => Self::error(&InteractionError::Encode(err)),
        }
    }

    /// A plain-text error response. Verification failures all read
    /// `invalid request signature`.
    pub fn error(err: &InteractionError) -> Self {
        let status = err.status();
        let body = if status == 401 {
            InteractionError::BadSignature.to_string()
        } else {
            err.to_string()
        };
        Self {
            status,
            content_type: "text/plain",
            body,
        }
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handles Discord interactions for the dice engine.
pub struct InteractionHandler<V, F> {
    verifier: V,
    factory: F,
    resolver: Resolver,
}

impl<F: SourceFactory> InteractionHandler<Ed25519Verifier, F> {
    /// Build a handler from configuration.
    pub fn from_config(config: &InteractionConfig, factory: F) -> InteractionResult<Self> {
        Ok(Self::new(
            config.verifier()?,
            factory,
            config.resolver.clone(),
        ))
    }
}

impl<V: SignatureVerifier, F: SourceFactory> InteractionHandler<V, F> {
    /// Create a handler.
    pub fn new(verifier: V, factory: F, config: ResolverConfig) -> Self {
        Self {
            verifier,
            factory,
            resolver: Resolver::new(config),
        }
    }

    /// Handle one request. Never fails: errors become error responses.
    pub fn handle(&mut self, request: &InteractionRequest) -> InteractionResponse {
        log::info!("interaction request received ({} bytes)", request.body.len());
        match self.dispatch(request) {
            Ok(reply) => InteractionResponse::reply(&reply),
            Err(err) => {
                log::warn!("interaction rejected: {err}");
                InteractionResponse::error(&err)
            }
        }
    }

    fn dispatch(&mut self, request: &InteractionRequest) -> InteractionResult<InteractionReply> {
        let signature = request
            .header(SIGNATURE_HEADER)
            .ok_or(InteractionError::MissingHeader(SIGNATURE_HEADER))?;
        let timestamp = request
            .header(TIMESTAMP_HEADER)
            .ok_or(InteractionError::MissingHeader(TIMESTAMP_HEADER))?;
        self.verifier.verify(timestamp, &request.body, signature)?;

        let interaction: Interaction = serde_json::from_str(&request.body)?;
        if interaction.is_ping() {
            log::debug!("answering ping");
            return Ok(InteractionReply::pong());
        }

        let data = interaction.data.as_ref().ok_or(InteractionError::MissingData)?;
        let check = parse_check(data)?;
        let outcomes = self.resolver.resolve(&check, &mut self.factory);
        Ok(InteractionReply::message(render_outcomes(&outcomes)))
    }
}
