//! Service context - dependency container for services
//!
//! Holds the storage backend, the platform client, and the administrative
//! identity. Constructed once at startup and shared by every interaction;
//! nothing in here is reinitialized per request.

use std::sync::Arc;

use ship_core::traits::{PlatformClient, ShipStore};
use ship_core::value_objects::UserId;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn ShipStore>,
    platform: Arc<dyn PlatformClient>,
    admin_user_id: UserId,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        store: Arc<dyn ShipStore>,
        platform: Arc<dyn PlatformClient>,
        admin_user_id: UserId,
    ) -> Self {
        Self {
            store,
            platform,
            admin_user_id,
        }
    }

    /// Get the ship store
    pub fn store(&self) -> &dyn ShipStore {
        self.store.as_ref()
    }

    /// Get the platform client
    pub fn platform(&self) -> &dyn PlatformClient {
        self.platform.as_ref()
    }

    /// Check whether the given user is the configured administrator.
    ///
    /// The single guard for every mutating command; handlers never duplicate
    /// this check.
    pub fn is_admin(&self, user_id: &UserId) -> bool {
        *user_id == self.admin_user_id
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"ShipStore")
            .field("platform", &"PlatformClient")
            .field("admin_user_id", &self.admin_user_id)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<dyn ShipStore>>,
    platform: Option<Arc<dyn PlatformClient>>,
    admin_user_id: Option<UserId>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn ShipStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn platform(mut self, platform: Arc<dyn PlatformClient>) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn admin_user_id(mut self, admin_user_id: UserId) -> Self {
        self.admin_user_id = Some(admin_user_id);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns an error if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.store
                .ok_or(ServiceError::MissingDependency("store"))?,
            self.platform
                .ok_or(ServiceError::MissingDependency("platform"))?,
            self.admin_user_id
                .ok_or(ServiceError::MissingDependency("admin_user_id"))?,
        ))
    }
}
