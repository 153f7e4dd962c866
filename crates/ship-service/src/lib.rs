//! # ship-service
//!
//! Application layer containing the interaction state machine, the command
//! registry, and the command handlers.

pub mod services;

// Re-export all services for convenience
pub use services::{
    Command, CommandSpec, InteractionService, MatchService, RosterService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, Strategy,
};
