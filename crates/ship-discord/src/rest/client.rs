//! Outbound Discord REST API client
//!
//! Implements the platform port with `reqwest`. One client is constructed at
//! startup and shared; `reqwest::Client` pools connections internally.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use ship_core::error::DomainError;
use ship_core::traits::{PlatformClient, PlatformUser, RepoResult};
use ship_core::value_objects::UserId;

use crate::commands::command_definitions;

/// Guild member envelope; the interesting bits live on the nested user
#[derive(Debug, Deserialize)]
struct MemberEnvelope {
    user: PlatformUser,
}

/// Discord REST API client
#[derive(Clone)]
pub struct DiscordRestClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl DiscordRestClient {
    /// Create a new client against the given API base URL
    pub fn new(api_base: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            bot_token: bot_token.into(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.bot_token)
    }

    fn map_send_error(e: reqwest::Error) -> DomainError {
        DomainError::FetchError(e.to_string())
    }

    /// Bulk-overwrite the application's slash commands
    #[instrument(skip(self))]
    pub async fn register_commands(&self, application_id: &str) -> RepoResult<()> {
        let url = format!("{}/applications/{}/commands", self.api_base, application_id);
        let response = self
            .http
            .put(&url)
            .header("Authorization", self.auth_header())
            .json(&command_definitions())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(DomainError::FetchError(format!(
                "command registration returned {}",
                response.status()
            )));
        }

        tracing::info!(application_id = %application_id, "Slash commands registered");
        Ok(())
    }
}

#[async_trait]
impl PlatformClient for DiscordRestClient {
    #[instrument(skip(self))]
    async fn get_user(&self, id: &UserId) -> RepoResult<PlatformUser> {
        let url = format!("{}/users/{}", self.api_base, id);
        let response = self
            .http
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(DomainError::FetchError(format!(
                "user fetch returned {}",
                response.status()
            )));
        }

        response.json().await.map_err(Self::map_send_error)
    }

    #[instrument(skip(self))]
    async fn list_guild_members(&self, guild_id: &str) -> RepoResult<Vec<PlatformUser>> {
        let url = format!("{}/guilds/{}/members?limit=1000", self.api_base, guild_id);
        let response = self
            .http
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(DomainError::FetchError(format!(
                "member list returned {}",
                response.status()
            )));
        }

        let members: Vec<MemberEnvelope> =
            response.json().await.map_err(Self::map_send_error)?;
        Ok(members.into_iter().map(|m| m.user).collect())
    }

    #[instrument(skip(self, payload))]
    async fn edit_original_response(
        &self,
        application_id: &str,
        interaction_token: &str,
        payload: &serde_json::Value,
    ) -> RepoResult<()> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.api_base, application_id, interaction_token
        );
        let response = self
            .http
            .patch(&url)
            .json(payload)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(DomainError::FetchError(format!(
                "follow-up edit returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
