//! Discord interaction adapter for the Atomic Highway dice engine.
//!
//! Verifies signed interaction requests, answers pings, turns slash-command
//! options into a [`CheckRequest`](ah_dice::CheckRequest), and renders the
//! resolved outcomes into a channel message. Hosting is left to the caller:
//! the [`InteractionHandler`] maps an [`InteractionRequest`] to an
//! [`InteractionResponse`] without touching the network.

pub mod command;
pub mod config;
pub mod error;
pub mod handler;
pub mod payload;
pub mod render;
pub mod verify;

pub use command::parse_check;
pub use config::InteractionConfig;
pub use error::{InteractionError, InteractionResult};
pub use handler::{InteractionHandler, InteractionRequest, InteractionResponse};
pub use payload::{CommandData, CommandOption, Interaction, InteractionReply};
pub use render::{render_outcome, render_outcomes};
pub use verify::{Ed25519Verifier, SIGNATURE_HEADER, SignatureVerifier, TIMESTAMP_HEADER};
