//! Slash command definitions and handlers.

pub mod status;

use serenity::all::CreateCommand;

/// Every command the bot registers in its guild.
pub fn definitions() -> Vec<CreateCommand> {
    vec![status::register()]
}
