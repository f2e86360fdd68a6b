use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::{command::status, gateway::SerenityGateway},
    config::Config,
};

/// Handles inbound interactions, answering the `/status` command.
///
/// Anything other than a `/status` slash command is ignored. Interactions
/// outside a guild fall back to the configured guild.
pub async fn handle_interaction_create(config: &Config, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != status::NAME {
        return;
    }

    let guild_id = command.guild_id.unwrap_or(config.guild_id);
    let gateway = SerenityGateway::from_context(&ctx);

    let report = status::run(&gateway, config, guild_id).await;

    if let Err(e) = command
        .create_response(&ctx.http, status::response(&report))
        .await
    {
        tracing::error!(
            "Failed to respond to /status from user {}: {}",
            command.user.id,
            e
        );
    }
}
