//! Business logic services
//!
//! This module contains the interaction state machine, the command registry,
//! and the handlers that orchestrate domain operations.

pub mod context;
pub mod error;
pub mod interaction;
pub mod matchmaking;
pub mod registry;
pub mod roster;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use interaction::InteractionService;
pub use matchmaking::MatchService;
pub use registry::{Command, CommandSpec, Strategy};
pub use roster::RosterService;
