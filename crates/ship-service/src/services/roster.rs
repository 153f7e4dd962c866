//! Roster commands - ship management, support votes, and the leaderboard

use tracing::{info, instrument};

use ship_core::value_objects::UserId;
use ship_discord::protocol::{Embed, InteractionData, ResponseData};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many ships the leaderboard shows
const LEADERBOARD_LIMIT: usize = 10;

/// Accent color of the leaderboard embed
const LEADERBOARD_EMBED_COLOR: u32 = 0x00FF_D700;

/// Roster command handlers
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle `createship`/`editship action={add,edit,remove}`
    #[instrument(skip(self, data))]
    pub async fn manage(&self, data: &InteractionData) -> ServiceResult<ResponseData> {
        let action = data
            .option_str("action")
            .ok_or(ServiceError::MissingOption("action"))?;

        match action {
            "add" => {
                let user1 = self.required_user(data, "user1")?;
                let user2 = self.required_user(data, "user2")?;
                let name = data
                    .option_str("name")
                    .ok_or(ServiceError::MissingOption("name"))?;

                let ship = self.ctx.store().create(&user1, &user2, name).await?;
                info!(name = %ship.name, id = %ship.id, "Ship created");
                Ok(ResponseData::message(format!(
                    "💞 Ship **{}** created!",
                    ship.name
                )))
            }
            "edit" => {
                let user1 = self.required_user(data, "user1")?;
                let user2 = self.required_user(data, "user2")?;
                let name = data
                    .option_str("name")
                    .ok_or(ServiceError::MissingOption("name"))?;

                let ship = self.ctx.store().rename(&user1, &user2, name).await?;
                info!(name = %ship.name, id = %ship.id, "Ship renamed");
                Ok(ResponseData::message(format!(
                    "✏️ Ship renamed to **{}**.",
                    ship.name
                )))
            }
            "remove" => {
                let name = data
                    .option_str("name")
                    .ok_or(ServiceError::MissingOption("name"))?;

                self.ctx.store().delete(name).await?;
                info!(name = %name, "Ship deleted");
                Ok(ResponseData::message(format!("🗑️ Ship **{name}** deleted.")))
            }
            other => Err(ServiceError::UnknownAction(other.to_string())),
        }
    }

    /// Handle `support name`
    #[instrument(skip(self, data))]
    pub async fn support(&self, data: &InteractionData) -> ServiceResult<ResponseData> {
        let name = data
            .option_str("name")
            .ok_or(ServiceError::MissingOption("name"))?;

        let count = self.ctx.store().increment_support(name).await?;
        Ok(ResponseData::message(format!(
            "💖 **{name}** now has **{count}** supports!"
        )))
    }

    /// Handle `edit_ship_count name support`
    #[instrument(skip(self, data))]
    pub async fn set_count(&self, data: &InteractionData) -> ServiceResult<ResponseData> {
        let name = data
            .option_str("name")
            .ok_or(ServiceError::MissingOption("name"))?;
        let value = data
            .option_i64("support")
            .ok_or(ServiceError::MissingOption("support"))?;

        self.ctx.store().set_support(name, value).await?;
        info!(name = %name, value, "Support count overridden");
        Ok(ResponseData::message(format!(
            "🔧 **{name}** support count set to **{value}**."
        )))
    }

    /// Handle `leaderboard`
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ServiceResult<ResponseData> {
        let ships = self.ctx.store().top_by_score(LEADERBOARD_LIMIT).await?;

        if ships.is_empty() {
            return Ok(ResponseData::message(
                "No ships found. Ask an admin to create one with /createship!",
            ));
        }

        let lines: Vec<String> = ships
            .iter()
            .enumerate()
            .map(|(i, ship)| {
                format!(
                    "**{}.** {} — {} supports",
                    i + 1,
                    ship.name,
                    ship.support_count
                )
            })
            .collect();

        let embed = Embed::new("🏆 Ship Leaderboard")
            .with_color(LEADERBOARD_EMBED_COLOR)
            .with_description(lines.join("\n"));

        Ok(ResponseData::embed(embed))
    }

    fn required_user(&self, data: &InteractionData, option: &'static str) -> ServiceResult<UserId> {
        data.option_str(option)
            .map(UserId::from)
            .ok_or(ServiceError::MissingOption(option))
    }
}
