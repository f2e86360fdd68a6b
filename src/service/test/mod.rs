use crate::bot::gateway::fake::FakeGateway;
use crate::config::Config;
use crate::model::presence::PresenceStatus;
use serenity::all::{ChannelId, GuildId, UserId};


// Matches the guild and alert channel of `Config::test`
const GUILD: u64 = 500;
const ALERT_CHANNEL: u64 = 600;
const BOT_A: u64 = 701;
const BOT_B: u64 = 702;
