//! Repository implementations

mod error;
mod ship;

pub use ship::PgShipStore;
