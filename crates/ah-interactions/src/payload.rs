//! Discord interaction payloads.

use serde::{Deserialize, Serialize};

/// Interaction type sent by Discord to check the endpoint is alive.
pub const PING: u8 = 1;

/// Reply type acknowledging a ping.
pub const PONG: u8 = 1;

/// Reply type posting a message in the invoking channel.
pub const CHANNEL_MESSAGE: u8 = 4;

/// An inbound interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Interaction {
    /// Interaction type; `1` is a ping, anything else is treated as a command.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Command data, present for application commands.
    #[serde(default)]
    pub data: Option<CommandData>,
}

impl Interaction {
    /// Returns true for a liveness ping.
    pub fn is_ping(&self) -> bool {
        self.kind == PING
    }
}

/// The invoked command and its options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandData {
    /// Command name.
    #[serde(default)]
    pub name: String,
    /// Options in the order the user supplied them.
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// A single command option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandOption {
    /// Option name.
    #[serde(default)]
    pub name: String,
    /// Option value as sent.
    pub value: serde_json::Value,
}

/// An outbound interaction reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionReply {
    /// Reply type.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Message data, omitted for a pong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ReplyData>,
}

/// Message body of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyData {
    /// Message text.
    pub content: String,
}

impl InteractionReply {
    /// Acknowledge a ping.
    pub fn pong() -> Self {
        Self {
            kind: PONG,
            data: None,
        }
    }

    /// Post `content` in the channel.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: CHANNEL_MESSAGE,
            data: Some(ReplyData {
                content: content.into(),
            }),
        }
    }
}
