//! # ship-common
//!
//! Shared utilities including configuration, error handling, interaction
//! signature verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{InteractionVerifier, SignatureError};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, DiscordConfig, Environment, RedisConfig,
    ServerConfig, StoreSettings,
};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
