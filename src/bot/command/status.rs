//! `/status` command showing the presence of every monitored bot.

use serenity::all::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage, GuildId,
};

use crate::{
    bot::gateway::DiscordGateway, config::Config, model::status_report::StatusReport,
    service::presence::PresenceService,
};

pub const NAME: &str = "status";
const DESCRIPTION: &str = "Show the current status of all monitored bots";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Builds the status report from a fresh snapshot of the guild.
pub async fn run<G: DiscordGateway>(
    gateway: &G,
    config: &Config,
    guild_id: GuildId,
) -> StatusReport {
    let snapshot = PresenceService::new(gateway, config)
        .get_bot_statuses(guild_id)
        .await;

    StatusReport::from_snapshot(&snapshot)
}

/// Wraps the report in a reply only the invoking user can see.
pub fn response(report: &StatusReport) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(report.to_embed())
            .ephemeral(true),
    )
}
