//! Ports - interfaces the domain needs from infrastructure

mod platform;
mod store;

pub use platform::{PlatformClient, PlatformUser};
pub use store::{RepoResult, ShipStore};
