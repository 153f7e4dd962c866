//! Interaction response payloads

use serde::Serialize;

/// Acknowledge a handshake
pub const CALLBACK_PONG: u8 = 1;
/// Respond immediately with message content
pub const CALLBACK_CHANNEL_MESSAGE: u8 = 4;
/// Acknowledge now, deliver content later via a follow-up edit
pub const CALLBACK_DEFERRED_CHANNEL_MESSAGE: u8 = 5;

/// Outbound response to an interaction
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl InteractionResponse {
    /// Handshake acknowledgment (`{"type": 1}`)
    pub fn pong() -> Self {
        Self {
            kind: CALLBACK_PONG,
            data: None,
        }
    }

    /// Deferred acknowledgment (`{"type": 5}`)
    pub fn deferred() -> Self {
        Self {
            kind: CALLBACK_DEFERRED_CHANNEL_MESSAGE,
            data: None,
        }
    }

    /// Immediate response carrying the given content
    pub fn channel_message(data: ResponseData) -> Self {
        Self {
            kind: CALLBACK_CHANNEL_MESSAGE,
            data: Some(data),
        }
    }
}

/// Message content for an immediate response or a follow-up edit
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
}

impl ResponseData {
    /// Plain text message
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: None,
        }
    }

    /// Single-embed message
    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embeds: Some(vec![embed]),
        }
    }

    /// Serialize to the `{content?, embeds?}` payload used by follow-up edits
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// A message embed
#[derive(Debug, Clone, Default, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// Create an embed with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the accent color
    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the body text
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a full-width field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    /// Append an inline field
    #[must_use]
    pub fn with_inline_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: true,
        });
        self
    }
}

/// One embed field
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}
