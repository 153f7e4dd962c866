//! Interaction wire protocol
//!
//! Request and response payload shapes for the interactions webhook.

mod interaction;
mod response;

pub use interaction::{
    CommandOption, Interaction, InteractionData, InteractionMember, InteractionUser, OptionValue,
    INTERACTION_TYPE_APPLICATION_COMMAND, INTERACTION_TYPE_PING,
};
pub use response::{
    Embed, EmbedField, InteractionResponse, ResponseData, CALLBACK_CHANNEL_MESSAGE,
    CALLBACK_DEFERRED_CHANNEL_MESSAGE, CALLBACK_PONG,
};
