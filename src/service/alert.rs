use chrono::Utc;
use dioxus_logger::tracing;
use serenity::all::{Mention, UserId};

use crate::{
    bot::gateway::DiscordGateway, config::Config, error::AppError,
    service::presence::PresenceService,
};

/// Posts offline alerts for monitored bots to the alert channel.
pub struct AlertService<'a, G: DiscordGateway> {
    gateway: &'a G,
    config: &'a Config,
}

impl<'a, G: DiscordGateway> AlertService<'a, G> {
    pub fn new(gateway: &'a G, config: &'a Config) -> Self {
        Self { gateway, config }
    }

    /// Runs one poll cycle.
    ///
    /// Resolves the alert channel, snapshots the monitored bots in the channel's
    /// guild and sends one alert per offline bot. Alerts are not deduplicated: a
    /// bot that stays offline is reported again on every cycle. A failed send is
    /// logged and the remaining alerts are still attempted.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of alerts delivered
    /// - `Err(AppError)` - Alert channel could not be resolved, nothing was sent
    pub async fn check_bots(&self) -> Result<usize, AppError> {
        let channel_id = self.config.alert_channel_id;
        let guild_id = self.gateway.resolve_channel_guild(channel_id).await?;

        let snapshot = PresenceService::new(self.gateway, self.config)
            .get_bot_statuses(guild_id)
            .await;

        let mut sent = 0;

        for bot_id in snapshot.offline() {
            let content = format_offline_alert(bot_id, Utc::now().timestamp());

            match self.gateway.send_message(channel_id, content).await {
                Ok(()) => {
                    sent += 1;
                    tracing::info!("Sent offline alert for bot {}", bot_id);
                }
                Err(e) => {
                    tracing::error!("Failed to send offline alert for bot {}: {}", bot_id, e);
                }
            }
        }

        Ok(sent)
    }
}

/// Formats the alert text for an offline bot.
///
/// The time uses Discord's timestamp markup so each reader sees it in their own
/// locale.
pub fn format_offline_alert(bot_id: UserId, unix_timestamp: i64) -> String {
    format!(
        "⚠️ {} is **offline** as of <t:{}:T>.",
        Mention::User(bot_id),
        unix_timestamp
    )
}
