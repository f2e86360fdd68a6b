use std::sync::Arc;

use serenity::all::{
    Cache, ChannelId, Context, CreateCommand, CreateMessage, GuildId, Http, UserId,
};
use serenity::async_trait;

use crate::{bot::gateway::DiscordGateway, error::AppError, model::presence::PresenceStatus};

/// Live gateway backed by Serenity's HTTP client and in-memory cache.
///
/// Both handles are reference counted, so the gateway is cheap to clone into
/// scheduler jobs and event handlers.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn fetch_presence(
        &self,
        guild_id: GuildId,
        bot_id: UserId,
    ) -> Result<PresenceStatus, AppError> {
        // Fails for unknown users and for accounts that are not guild members
        self.http.get_member(guild_id, bot_id).await?;

        // Presences only arrive over the gateway, never through the REST API
        let guild = self
            .cache
            .guild(guild_id)
            .ok_or_else(|| AppError::NotFound(format!("Guild {} is not cached", guild_id)))?;

        Ok(PresenceStatus::from_presence(guild.presences.get(&bot_id)))
    }

    async fn resolve_channel_guild(&self, channel_id: ChannelId) -> Result<GuildId, AppError> {
        let channel = self.http.get_channel(channel_id).await?;

        channel
            .guild()
            .map(|channel| channel.guild_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Channel {} is not a guild channel", channel_id))
            })
    }

    async fn send_message(&self, channel_id: ChannelId, content: String) -> Result<(), AppError> {
        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn register_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError> {
        let registered = guild_id.set_commands(&self.http, commands).await?;

        Ok(registered.len())
    }
}
