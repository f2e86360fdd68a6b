//! Discord bot integration for presence monitoring.
//!
//! The bot connects to the gateway, registers the `/status` command in the
//! configured guild, answers status queries and drives the presence poller once
//! connected. Serenity owns the connection, reconnects and the presence cache.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the guild cache
//! - `GUILD_MEMBERS` - Fetch monitored bots as guild members (privileged intent)
//! - `GUILD_PRESENCES` - Receive presence updates into the cache (privileged intent)
//!
//! Both privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod command;
pub mod gateway;
pub mod handler;
pub mod start;
