//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway identify. The first one
//! runs the full startup sequence: register the slash command, poll once, then arm
//! the repeating poller. Later ones only re-register the command, which overwrites
//! the existing definition.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::{
    bot::gateway::SerenityGateway, config::Config, scheduler::presence_poll, startup,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Shared configuration for the poller and command registration
/// - `polling` - Flag recording whether the poller is already armed
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Arc<Config>, polling: &AtomicBool, ctx: Context, ready: Ready) {
    tracing::info!("Logged in as {}", ready.user.tag());

    let gateway = SerenityGateway::from_context(&ctx);

    if !startup::run(&gateway, config, polling).await {
        return;
    }

    if let Err(e) = presence_poll::start_scheduler(gateway, config.clone()).await {
        tracing::error!("Failed to start presence poll scheduler: {}", e);
    }
}
