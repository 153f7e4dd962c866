//! # ship-cache
//!
//! Redis implementation of the ship store.
//!
//! Layout per ship: one hash (`ship:rec:{name}`) holding the record fields,
//! a pair index key mapping the canonical user pair to the ship name, and a
//! single sorted set (`ship:board`) scoring every ship by support count.

pub mod pool;
pub mod store;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export store types
pub use store::RedisShipStore;
