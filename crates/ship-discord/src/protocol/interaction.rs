//! Inbound interaction payloads
//!
//! [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object).

use serde::Deserialize;

/// Liveness-check handshake
pub const INTERACTION_TYPE_PING: u8 = 1;
/// Slash-command invocation
pub const INTERACTION_TYPE_APPLICATION_COMMAND: u8 = 2;

/// One inbound webhook interaction.
///
/// Lives for a single request/response cycle, or until its deferred
/// follow-up completes.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// The type of interaction
    #[serde(rename = "type")]
    pub kind: u8,
    /// Id of the application this interaction is for
    #[serde(default)]
    pub application_id: Option<String>,
    /// A continuation token for editing the original response
    #[serde(default)]
    pub token: Option<String>,
    /// Guild the command was invoked from, absent in DMs
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Command payload, present for type 2
    #[serde(default)]
    pub data: Option<InteractionData>,
    /// Invoking member (guild invocations)
    #[serde(default)]
    pub member: Option<InteractionMember>,
    /// Invoking user (DM invocations)
    #[serde(default)]
    pub user: Option<InteractionUser>,
}

impl Interaction {
    /// Id of the invoking user, wherever the payload put it
    pub fn invoker_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| m.user.id.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }

    /// Name of the invoked command, if any
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }
}

/// Command name and options
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl InteractionData {
    /// Look up a string option by name
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_str())
    }

    /// Look up an integer option by name
    pub fn option_i64(&self, name: &str) -> Option<i64> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_i64())
    }
}

/// A single `{name, value}` command option
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

/// Scalar option value; user options arrive as string ids, integer options
/// as numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Num(f64),
    Bool(bool),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Num(n) => Some(*n as i64),
            _ => None,
        }
    }
}

/// Invoking guild member, carrying its user record
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionMember {
    pub user: InteractionUser,
}

/// Invoking user
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
}
