use std::fmt;
use std::time::Duration;

use serenity::all::{ApplicationId, ChannelId, GuildId, UserId};

use crate::error::{config::ConfigError, AppError};

// Deployment values. Edit these before deploying or override them through the
// environment variables of the same name.
const MONITORED_BOT_IDS: &[&str] = &[
    "MONITORED_BOT_ID_1", // example: music bot
    "MONITORED_BOT_ID_2", // example: moderation bot
];
const ALERT_CHANNEL_ID: &str = "YOUR_ALERT_CHANNEL_ID";
const GUILD_ID: &str = "YOUR_GUILD_ID";
const CHECK_INTERVAL_SECS: u64 = 60;

/// Immutable bot configuration, built once at startup and shared with the poller
/// and the command responder.
#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: ApplicationId,

    /// Guild the `/status` command is registered in.
    pub guild_id: GuildId,
    /// Channel that receives offline alerts.
    pub alert_channel_id: ChannelId,
    /// Bots to monitor, in display order and without duplicates.
    pub monitored_bots: Vec<UserId>,
    pub check_interval: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .field("alert_channel_id", &self.alert_channel_id)
            .field("monitored_bots", &self.monitored_bots)
            .field("check_interval", &self.check_interval)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `DISCORD_TOKEN` and `CLIENT_ID` are required. The remaining keys fall back
    /// to the in-source deployment values when absent or blank, so an `.env` line
    /// such as `GUILD_ID=` keeps the edited constant.
    ///
    /// # Returns
    /// - `Ok(Config)` - All values present and valid
    /// - `Err(AppError::ConfigErr)` - Missing secret, malformed ID or interval
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;
        let client_id = lookup("CLIENT_ID")
            .ok_or_else(|| ConfigError::MissingEnvVar("CLIENT_ID".to_string()))?;

        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let guild_id = optional("GUILD_ID").unwrap_or_else(|| GUILD_ID.to_string());
        let alert_channel_id =
            optional("ALERT_CHANNEL_ID").unwrap_or_else(|| ALERT_CHANNEL_ID.to_string());

        let application_id = ApplicationId::new(parse_id("CLIENT_ID", &client_id)?);
        let guild_id = GuildId::new(parse_id("GUILD_ID", &guild_id)?);
        let alert_channel_id = ChannelId::new(parse_id("ALERT_CHANNEL_ID", &alert_channel_id)?);

        let monitored_bots = match optional("MONITORED_BOT_IDS") {
            Some(ids) => parse_bot_ids(ids.split(','))?,
            None => parse_bot_ids(MONITORED_BOT_IDS.iter().copied())?,
        };

        let check_interval = match optional("CHECK_INTERVAL_SECS") {
            Some(value) => parse_interval(&value)?,
            None => Duration::from_secs(CHECK_INTERVAL_SECS),
        };

        Ok(Self {
            discord_token,
            application_id,
            guild_id,
            alert_channel_id,
            monitored_bots,
            check_interval,
        })
    }

    /// Configuration for tests: guild 500, alert channel 600, the given bots.
    #[cfg(test)]
    pub fn test(monitored_bots: &[u64]) -> Self {
        Self {
            discord_token: "token".to_string(),
            application_id: ApplicationId::new(1),
            guild_id: GuildId::new(500),
            alert_channel_id: ChannelId::new(600),
            monitored_bots: monitored_bots.iter().copied().map(UserId::new).collect(),
            check_interval: Duration::from_secs(CHECK_INTERVAL_SECS),
        }
    }
}

/// Parses a non-zero Discord snowflake.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    let value = value.trim();
    match value.parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidId {
            name: name.to_string(),
            value: value.to_string(),
            source: None,
        }),
        Ok(id) => Ok(id),
        Err(e) => Err(ConfigError::InvalidId {
            name: name.to_string(),
            value: value.to_string(),
            source: Some(e),
        }),
    }
}

/// Parses monitored bot IDs, skipping blanks and keeping the first occurrence of
/// any repeated ID so every bot appears exactly once in a snapshot.
fn parse_bot_ids<'a, I>(ids: I) -> Result<Vec<UserId>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bots: Vec<UserId> = Vec::new();

    for raw in ids.into_iter().map(str::trim).filter(|id| !id.is_empty()) {
        let bot = UserId::new(parse_id("MONITORED_BOT_IDS", raw)?);
        if !bots.contains(&bot) {
            bots.push(bot);
        }
    }

    if bots.is_empty() {
        return Err(ConfigError::NoMonitoredBots);
    }

    Ok(bots)
}

fn parse_interval(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidInterval(value.to_string())),
    }
}
