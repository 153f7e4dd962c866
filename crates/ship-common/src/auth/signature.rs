//! Interaction signature verification.
//!
//! Discord signs every webhook delivery with a detached Ed25519 signature
//! over `timestamp || raw_body`. The public key is parsed once at startup;
//! verification itself is pure CPU work and runs before the payload is
//! parsed.

use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH};

/// Signature verification errors
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Malformed signature")]
    MalformedSignature,

    #[error("Signature verification failed")]
    VerificationFailed,
}

/// Verifies inbound interaction signatures against the application's public key
#[derive(Debug, Clone)]
pub struct InteractionVerifier {
    key: VerifyingKey,
}

impl InteractionVerifier {
    /// Create a verifier from a hex-encoded Ed25519 public key
    pub fn new(public_key_hex: &str) -> Result<Self, SignatureError> {
        let bytes = hex::decode(public_key_hex).map_err(|_| SignatureError::InvalidPublicKey)?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidPublicKey)?;
        let key = VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidPublicKey)?;
        Ok(Self { key })
    }

    /// Verify a detached signature over `timestamp || body`
    pub fn verify(
        &self,
        signature_hex: &str,
        timestamp: &str,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let signature_bytes =
            hex::decode(signature_hex).map_err(|_| SignatureError::MalformedSignature)?;
        let signature = Signature::from_slice(&signature_bytes)
            .map_err(|_| SignatureError::MalformedSignature)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|_| SignatureError::VerificationFailed)
    }
}
