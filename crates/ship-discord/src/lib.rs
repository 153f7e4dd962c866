//! # ship-discord
//!
//! Discord-facing plumbing: the interaction wire protocol (inbound payloads,
//! response callbacks, embeds), slash-command definitions, and the REST
//! client implementing the platform port.

pub mod commands;
pub mod protocol;
pub mod rest;

// Re-export commonly used types
pub use protocol::{
    CommandOption, Embed, EmbedField, Interaction, InteractionData, InteractionResponse,
    OptionValue, ResponseData, CALLBACK_CHANNEL_MESSAGE, CALLBACK_DEFERRED_CHANNEL_MESSAGE,
    CALLBACK_PONG, INTERACTION_TYPE_APPLICATION_COMMAND, INTERACTION_TYPE_PING,
};
pub use rest::DiscordRestClient;
