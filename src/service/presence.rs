use dioxus_logger::tracing;
use serenity::all::GuildId;

use crate::{
    bot::gateway::DiscordGateway,
    config::Config,
    model::presence::{PresenceStatus, StatusSnapshot},
};

/// Builds presence snapshots of the monitored bots.
pub struct PresenceService<'a, G: DiscordGateway> {
    gateway: &'a G,
    config: &'a Config,
}

impl<'a, G: DiscordGateway> PresenceService<'a, G> {
    pub fn new(gateway: &'a G, config: &'a Config) -> Self {
        Self { gateway, config }
    }

    /// Resolves the current status of every monitored bot in a guild.
    ///
    /// Bots are looked up one at a time in configured order. A failed lookup
    /// (unknown member, bot not in the guild, network error) resolves to
    /// `Offline` instead of failing the snapshot, so every configured bot is
    /// always present in the result.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose member presences are inspected
    ///
    /// # Returns
    /// - `StatusSnapshot` - One entry per monitored bot
    pub async fn get_bot_statuses(&self, guild_id: GuildId) -> StatusSnapshot {
        let mut snapshot = StatusSnapshot::new();

        for &bot_id in &self.config.monitored_bots {
            let status = match self.gateway.fetch_presence(guild_id, bot_id).await {
                Ok(status) => status,
                Err(e) => {
                    tracing::debug!(
                        "Presence lookup for bot {} in guild {} failed, treating as offline: {}",
                        bot_id,
                        guild_id,
                        e
                    );
                    PresenceStatus::Offline
                }
            };

            snapshot.insert(bot_id, status);
        }

        snapshot
    }
}
