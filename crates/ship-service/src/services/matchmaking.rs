//! Match commands - `ship` and `randomship`
//!
//! Resolves users through the platform client, runs the match engine, and
//! renders the result embed.

use std::collections::HashSet;

use rand::Rng;
use tracing::instrument;

use ship_core::matching;
use ship_core::traits::PlatformUser;
use ship_core::value_objects::UserId;
use ship_discord::protocol::{Embed, InteractionData, ResponseData};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Accent color of the ship result embed
const SHIP_EMBED_COLOR: u32 = 0x00FF_69B4;

/// Match command handlers
pub struct MatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchService<'a> {
    /// Create a new MatchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle `ship user1 user2`
    #[instrument(skip(self, data))]
    pub async fn ship(&self, data: &InteractionData) -> ServiceResult<ResponseData> {
        let user1 = data
            .option_str("user1")
            .ok_or(ServiceError::MissingOption("user1"))?;
        let user2 = data
            .option_str("user2")
            .ok_or(ServiceError::MissingOption("user2"))?;

        let uid1 = UserId::from(user1);
        let uid2 = UserId::from(user2);
        let (first, second) = tokio::try_join!(
            self.ctx.platform().get_user(&uid1),
            self.ctx.platform().get_user(&uid2),
        )?;

        Ok(render_match(&first, &second))
    }

    /// Handle `randomship`
    #[instrument(skip(self))]
    pub async fn randomship(&self, guild_id: Option<&str>) -> ServiceResult<ResponseData> {
        let guild_id = guild_id.ok_or(ServiceError::GuildOnly)?;

        let members = self.ctx.platform().list_guild_members(guild_id).await?;
        let candidates: Vec<&PlatformUser> = members.iter().filter(|m| !m.bot).collect();

        let (first, second) = pick_two_distinct(&candidates)?;
        Ok(render_match(first, second))
    }
}

/// Draw two members with distinct ids by rejection sampling.
fn pick_two_distinct<'a>(
    candidates: &[&'a PlatformUser],
) -> ServiceResult<(&'a PlatformUser, &'a PlatformUser)> {
    let distinct: HashSet<&UserId> = candidates.iter().map(|u| &u.id).collect();
    if distinct.len() < 2 {
        return Err(ServiceError::NotEnoughMembers);
    }

    let mut rng = rand::thread_rng();
    loop {
        let first = candidates[rng.gen_range(0..candidates.len())];
        let second = candidates[rng.gen_range(0..candidates.len())];
        if first.id != second.id {
            return Ok((first, second));
        }
    }
}

/// Build the ship result embed for two resolved users
fn render_match(first: &PlatformUser, second: &PlatformUser) -> ResponseData {
    let mut rng = rand::thread_rng();
    let percentage = matching::compatibility(&first.id, &second.id, &mut rng);
    let ship_name = matching::blend_name(first.display_name(), second.display_name());
    let comment = matching::comment_for(percentage);

    let embed = Embed::new("💞 Ship Result 💞")
        .with_color(SHIP_EMBED_COLOR)
        .with_field(
            "Couple",
            format!("{} + {}", first.display_name(), second.display_name()),
        )
        .with_inline_field("Compatibility", format!("{percentage}%"))
        .with_inline_field("Ship Name", ship_name)
        .with_field("Comment", comment);

    ResponseData::embed(embed)
}
