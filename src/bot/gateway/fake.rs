//! In-memory gateway for service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serenity::all::{ChannelId, CreateCommand, GuildId, UserId};
use serenity::async_trait;

use crate::{bot::gateway::DiscordGateway, error::AppError, model::presence::PresenceStatus};

/// Scripted stand-in for Discord.
///
/// Bots without a scripted presence fail their lookup, mirroring a member fetch
/// error. Channels without a scripted guild fail to resolve. Sent messages and
/// registered commands are recorded for assertions.
#[derive(Default)]
pub struct FakeGateway {
    presences: HashMap<UserId, PresenceStatus>,
    channels: HashMap<ChannelId, GuildId>,
    reject_registration: bool,
    lookups: AtomicUsize,
    sent: Mutex<Vec<(ChannelId, String)>>,
    calls: Mutex<Vec<&'static str>>,
    commands: Mutex<HashMap<GuildId, Vec<serde_json::Value>>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presence(mut self, bot_id: u64, status: PresenceStatus) -> Self {
        self.presences.insert(UserId::new(bot_id), status);
        self
    }

    pub fn with_channel(mut self, channel_id: u64, guild_id: u64) -> Self {
        self.channels
            .insert(ChannelId::new(channel_id), GuildId::new(guild_id));
        self
    }

    pub fn rejecting_registration(mut self) -> Self {
        self.reject_registration = true;
        self
    }

    /// Number of presence lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Names of the gateway operations performed, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    /// Serialized command definitions currently registered in a guild.
    pub fn commands(&self, guild_id: u64) -> Vec<serde_json::Value> {
        self.commands
            .lock()
            .unwrap()
            .get(&GuildId::new(guild_id))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DiscordGateway for FakeGateway {
    async fn fetch_presence(
        &self,
        _guild_id: GuildId,
        bot_id: UserId,
    ) -> Result<PresenceStatus, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.record("fetch_presence");

        self.presences
            .get(&bot_id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Unknown member {}", bot_id)))
    }

    async fn resolve_channel_guild(&self, channel_id: ChannelId) -> Result<GuildId, AppError> {
        self.record("resolve_channel_guild");
        self.channels
            .get(&channel_id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Unknown channel {}", channel_id)))
    }

    async fn send_message(&self, channel_id: ChannelId, content: String) -> Result<(), AppError> {
        self.record("send_message");
        self.sent.lock().unwrap().push((channel_id, content));
        Ok(())
    }

    async fn register_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError> {
        self.record("register_commands");
        if self.reject_registration {
            return Err(AppError::NotFound(format!("Unknown guild {}", guild_id)));
        }

        let definitions: Vec<serde_json::Value> = commands
            .iter()
            .map(|command| serde_json::to_value(command).unwrap())
            .collect();
        let count = definitions.len();

        // Bulk overwrite: the new list replaces whatever was registered before
        self.commands.lock().unwrap().insert(guild_id, definitions);

        Ok(count)
    }
}
