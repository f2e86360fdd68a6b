use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::config::Config;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    /// Set once the poller has been armed, so a gateway re-identify does not
    /// start a second one.
    pub polling: AtomicBool,
}

impl Handler {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            polling: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, &self.polling, ctx, ready).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.config, ctx, interaction).await;
    }
}
