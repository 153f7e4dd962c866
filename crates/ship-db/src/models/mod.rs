//! Database row models

mod ship;

pub use ship::ShipModel;
