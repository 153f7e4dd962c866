//! Redis-backed ship store

mod redis_store;

pub use redis_store::RedisShipStore;
