//! # ship-db
//!
//! Database layer implementing the `ShipStore` trait with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Row model with SQLx `FromRow` derive and entity mapper
//! - `PgShipStore` repository with startup schema bootstrap

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgShipStore;
