//! Boundary between the monitor and Discord.
//!
//! The services only talk to Discord through the `DiscordGateway` trait. The live
//! implementation wraps Serenity's HTTP client and cache; tests substitute a fake
//! with scripted presences.

#[cfg(test)]
pub mod fake;
pub mod live;

use serenity::all::{ChannelId, CreateCommand, GuildId, UserId};
use serenity::async_trait;

use crate::{error::AppError, model::presence::PresenceStatus};

pub use live::SerenityGateway;

/// Discord operations needed by the poller, the command responder and startup.
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Resolves a bot's current presence within a guild.
    ///
    /// # Returns
    /// - `Ok(PresenceStatus)` - Member found, status from the presence cache
    /// - `Err(AppError)` - Member could not be fetched or the guild is unknown
    async fn fetch_presence(
        &self,
        guild_id: GuildId,
        bot_id: UserId,
    ) -> Result<PresenceStatus, AppError>;

    /// Resolves a channel and returns the guild it belongs to.
    ///
    /// # Returns
    /// - `Ok(GuildId)` - Channel exists and is a guild channel
    /// - `Err(AppError::NotFound)` - Channel is not a guild channel
    /// - `Err(AppError::DiscordErr)` - Channel could not be fetched
    async fn resolve_channel_guild(&self, channel_id: ChannelId) -> Result<GuildId, AppError>;

    /// Sends a plain-text message to a channel.
    async fn send_message(&self, channel_id: ChannelId, content: String) -> Result<(), AppError>;

    /// Overwrites the guild's application commands with the given definitions.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands now registered in the guild
    /// - `Err(AppError::DiscordErr)` - Registration was rejected
    async fn register_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError>;
}
