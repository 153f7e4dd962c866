//! Request authentication - Ed25519 interaction signatures

mod signature;

pub use signature::{InteractionVerifier, SignatureError};
