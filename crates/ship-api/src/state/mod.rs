//! Application state
//!
//! Holds the shared state for the Axum application: the interaction service,
//! the signature verifier, and configuration.

use std::sync::Arc;

use ship_common::{AppConfig, InteractionVerifier};
use ship_service::{InteractionService, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Interaction state machine with its dependency container
    interactions: InteractionService,
    /// Parsed Ed25519 public key for request verification
    verifier: Arc<InteractionVerifier>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        verifier: InteractionVerifier,
        config: AppConfig,
    ) -> Self {
        Self {
            interactions: InteractionService::new(Arc::new(service_context)),
            verifier: Arc::new(verifier),
            config: Arc::new(config),
        }
    }

    /// Get the interaction service
    pub fn interactions(&self) -> &InteractionService {
        &self.interactions
    }

    /// Get the signature verifier
    pub fn verifier(&self) -> &InteractionVerifier {
        &self.verifier
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("interactions", &"InteractionService")
            .field("config", &"AppConfig")
            .finish()
    }
}
