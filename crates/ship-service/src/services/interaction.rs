//! Interaction state machine
//!
//! One inbound interaction moves through
//! `Received -> Verified -> Classified -> {ImmediateReply | Deferred ->
//! FollowUpSent} -> Done`. Signature verification (and the `Rejected` path)
//! happens at the API boundary before this service is reached; this module
//! owns classification, dispatch, the admin gate, and the deferred follow-up
//! task.

use std::sync::Arc;

use tracing::{instrument, warn};

use ship_core::value_objects::UserId;
use ship_discord::protocol::{
    Interaction, InteractionResponse, ResponseData, INTERACTION_TYPE_APPLICATION_COMMAND,
    INTERACTION_TYPE_PING,
};

use super::context::ServiceContext;
use super::error::ServiceError;
use super::matchmaking::MatchService;
use super::registry::{self, Command, Strategy};
use super::roster::RosterService;

/// Reply for command names outside the registry
const UNKNOWN_COMMAND_REPLY: &str = "Sorry, I don't recognize that command.";

/// Reply for non-admin invocations of mutating commands
const DENIAL_REPLY: &str = "🚫 You are not allowed to manage ships.";

/// Orchestrates one inbound interaction
#[derive(Clone)]
pub struct InteractionService {
    ctx: Arc<ServiceContext>,
}

impl InteractionService {
    /// Create a new InteractionService
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Classify a verified interaction and produce its response.
    ///
    /// Handshakes are answered in place; commands are dispatched through the
    /// registry. For deferred commands the returned response is the
    /// placeholder acknowledgment and the content is delivered by a spawned
    /// follow-up task.
    #[instrument(skip(self, interaction), fields(kind = interaction.kind, command = interaction.command_name()))]
    pub async fn handle(&self, interaction: Interaction) -> InteractionResponse {
        match interaction.kind {
            INTERACTION_TYPE_PING => InteractionResponse::pong(),
            INTERACTION_TYPE_APPLICATION_COMMAND => self.dispatch(interaction).await,
            _ => InteractionResponse::channel_message(ResponseData::message(UNKNOWN_COMMAND_REPLY)),
        }
    }

    async fn dispatch(&self, interaction: Interaction) -> InteractionResponse {
        let Some(spec) = interaction.command_name().and_then(registry::find) else {
            return InteractionResponse::channel_message(ResponseData::message(
                UNKNOWN_COMMAND_REPLY,
            ));
        };

        // The single authorization gate: runs before the strategy decision so
        // a denial is an immediate normal response and no handler ever sees
        // an unauthorized mutating call.
        if spec.admin_only && !self.invoked_by_admin(&interaction) {
            return InteractionResponse::channel_message(ResponseData::message(DENIAL_REPLY));
        }

        match spec.strategy {
            Strategy::Deferred => {
                let (Some(application_id), Some(token)) = (
                    interaction.application_id.clone(),
                    interaction.token.clone(),
                ) else {
                    // Nothing to edit later, so answer in place
                    return InteractionResponse::channel_message(
                        self.run(spec.command, &interaction).await,
                    );
                };
                self.spawn_follow_up(spec.command, interaction, application_id, token);
                InteractionResponse::deferred()
            }
            Strategy::Immediate => {
                InteractionResponse::channel_message(self.run(spec.command, &interaction).await)
            }
        }
    }

    fn invoked_by_admin(&self, interaction: &Interaction) -> bool {
        interaction
            .invoker_id()
            .is_some_and(|id| self.ctx.is_admin(&UserId::from(id)))
    }

    /// Run the handler out-of-band and deliver the outcome via a follow-up
    /// edit. The handler's result is already a renderable message whatever
    /// happened, so the caller is never left staring at the placeholder; an
    /// edit failure is logged and not retried.
    fn spawn_follow_up(
        &self,
        command: Command,
        interaction: Interaction,
        application_id: String,
        token: String,
    ) {
        let service = self.clone();
        tokio::spawn(async move {
            let data = service.run(command, &interaction).await;
            if let Err(e) = service
                .ctx
                .platform()
                .edit_original_response(&application_id, &token, &data.to_payload())
                .await
            {
                warn!(error = %e, ?command, "Failed to deliver follow-up response");
            }
        });
    }

    /// Execute a handler, converting every error into user-visible content
    async fn run(&self, command: Command, interaction: &Interaction) -> ResponseData {
        self.execute(command, interaction)
            .await
            .unwrap_or_else(|e| {
                if let ServiceError::Domain(domain) = &e {
                    if domain.is_infrastructure() {
                        warn!(error = %domain, ?command, "Command failed on infrastructure");
                    }
                }
                ResponseData::message(e.user_message())
            })
    }

    async fn execute(
        &self,
        command: Command,
        interaction: &Interaction,
    ) -> Result<ResponseData, ServiceError> {
        let data = interaction
            .data
            .as_ref()
            .ok_or(ServiceError::MissingOption("data"))?;

        match command {
            Command::Ship => MatchService::new(&self.ctx).ship(data).await,
            Command::RandomShip => {
                MatchService::new(&self.ctx)
                    .randomship(interaction.guild_id.as_deref())
                    .await
            }
            Command::ManageShips => RosterService::new(&self.ctx).manage(data).await,
            Command::Support => RosterService::new(&self.ctx).support(data).await,
            Command::EditShipCount => RosterService::new(&self.ctx).set_count(data).await,
            Command::Leaderboard => RosterService::new(&self.ctx).leaderboard().await,
        }
    }
}
