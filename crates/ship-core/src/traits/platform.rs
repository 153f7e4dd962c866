//! Platform port - outbound calls to the chat platform's REST API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::traits::store::RepoResult;
use crate::value_objects::UserId;

/// A platform user record as returned by the REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl PlatformUser {
    /// Display name shown in embeds, preferring the global display name
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

/// Outbound platform API operations consumed by command handlers.
///
/// All operations fail with [`crate::DomainError::FetchError`] on a
/// non-success response; callers convert that into a user-visible message.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Fetch a single user by id
    async fn get_user(&self, id: &UserId) -> RepoResult<PlatformUser>;

    /// List a guild's members, flattened to their user records (bots included)
    async fn list_guild_members(&self, guild_id: &str) -> RepoResult<Vec<PlatformUser>>;

    /// Edit the original response of a deferred interaction.
    ///
    /// Best-effort: a failure here is logged by the caller, never retried,
    /// and does not affect the acknowledgment already sent.
    async fn edit_original_response(
        &self,
        application_id: &str,
        interaction_token: &str,
        payload: &serde_json::Value,
    ) -> RepoResult<()>;
}
