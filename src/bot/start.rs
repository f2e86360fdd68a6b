use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client with the monitor's event handler.
///
/// # Arguments
/// - `config` - Shared configuration, also handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to connect
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: Arc<Config>) -> Result<Client, AppError> {
    // GUILD_MEMBERS and GUILD_PRESENCES are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES;

    let client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(Handler::new(config.clone()))
        .await?;

    Ok(client)
}

/// Connects the bot and blocks until the connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
