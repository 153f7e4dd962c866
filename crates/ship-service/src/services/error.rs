//! Service layer error types
//!
//! Every error a handler can produce ends up as ordinary chat content: the
//! dispatch layer calls [`ServiceError::user_message`] and sends the result
//! as a normal response. Nothing here ever becomes a protocol-level failure.

use ship_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain or infrastructure failure from the store or platform client
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A required command option was not supplied
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),

    /// Command invoked outside a guild
    #[error("Command requires a guild context")]
    GuildOnly,

    /// Not enough distinct non-bot members to pair up
    #[error("Not enough members to pick a pair from")]
    NotEnoughMembers,

    /// Unrecognized management action
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A required dependency was not provided at build time
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),
}

impl ServiceError {
    /// Render this error as the chat message the invoking user sees.
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::ShipNotFound(name)) => {
                format!("❌ No ship named **{name}** was found.")
            }
            Self::Domain(DomainError::PairNotFound) => {
                "❌ Those two aren't shipped yet.".to_string()
            }
            Self::Domain(DomainError::DuplicateName(name)) => {
                format!("❌ A ship named **{name}** already exists.")
            }
            Self::Domain(DomainError::InvalidSupportValue(_)) => {
                "❌ Support count can't be negative.".to_string()
            }
            Self::Domain(DomainError::FetchError(_)) => {
                "❌ Failed to fetch user information.".to_string()
            }
            Self::Domain(DomainError::DatabaseError(_) | DomainError::CacheError(_)) => {
                "❌ Something went wrong, please try again later.".to_string()
            }
            Self::MissingOption(name) => format!("❌ Missing required option `{name}`."),
            Self::GuildOnly => "❌ That command only works inside a server.".to_string(),
            Self::NotEnoughMembers => "❌ Not enough members to ship.".to_string(),
            Self::UnknownAction(action) => format!("❌ Unknown action `{action}`."),
            Self::MissingDependency(_) => {
                "❌ Something went wrong, please try again later.".to_string()
            }
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
