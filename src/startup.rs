use std::sync::atomic::{AtomicBool, Ordering};

use dioxus_logger::tracing;

use crate::{
    bot::command, bot::gateway::DiscordGateway, config::Config, scheduler::presence_poll,
};

/// Runs the startup sequence for one gateway ready event.
///
/// Registers the slash commands, then on the first call only runs an immediate
/// poll cycle. A failed registration does not stop the poll. The caller arms the
/// repeating poller when this returns `true`.
///
/// # Arguments
/// - `gateway` - Discord gateway for registration and the first poll
/// - `config` - Shared configuration
/// - `polling` - Set once the poller has been started for this process
///
/// # Returns
/// - `true` - First ready event, the repeating poller must be armed now
/// - `false` - Poller already running, only the commands were re-registered
pub async fn run<G: DiscordGateway>(gateway: &G, config: &Config, polling: &AtomicBool) -> bool {
    register_commands(gateway, config).await;

    if polling.swap(true, Ordering::SeqCst) {
        tracing::debug!("Presence poller already running, skipping startup poll");
        return false;
    }

    presence_poll::run_poll_cycle(gateway, config).await;

    true
}

/// Registers the bot's slash commands in the configured guild.
///
/// Registration is a bulk overwrite, so running it again with the same
/// definitions leaves the guild's command surface unchanged. Failures are logged
/// and not retried; the poller starts regardless.
///
/// # Arguments
/// - `gateway` - Discord gateway used for the registration request
/// - `config` - Configuration naming the target guild
///
/// # Returns
/// - `true` - Commands registered
/// - `false` - Registration failed and was logged
pub async fn register_commands<G: DiscordGateway>(gateway: &G, config: &Config) -> bool {
    tracing::info!("Registering slash commands in guild {}", config.guild_id);

    match gateway
        .register_commands(config.guild_id, command::definitions())
        .await
    {
        Ok(count) => {
            tracing::info!("Registered {} slash command(s)", count);
            true
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::gateway::fake::FakeGateway;

    /// Tests the first ready event: register, then poll once.
    ///
    /// Expected: registration precedes the poll, the offline bot is alerted and
    /// the caller is told to arm the poller
    #[tokio::test]
    async fn first_ready_registers_then_polls() {
        let gateway = FakeGateway::new().with_channel(600, 500);
        let polling = AtomicBool::new(false);

        let arm = run(&gateway, &Config::test(&[701]), &polling).await;

        assert!(arm);
        assert_eq!(
            gateway.calls(),
            vec![
                "register_commands",
                "resolve_channel_guild",
                "fetch_presence",
                "send_message",
            ]
        );
        assert_eq!(gateway.sent().len(), 1);
    }

    /// Tests that a rejected registration does not block the poller.
    ///
    /// Expected: alert still sent and the poller still armed
    #[tokio::test]
    async fn failed_registration_still_polls() {
        let gateway = FakeGateway::new()
            .with_channel(600, 500)
            .rejecting_registration();
        let polling = AtomicBool::new(false);

        let arm = run(&gateway, &Config::test(&[701]), &polling).await;

        assert!(arm);
        assert_eq!(gateway.sent().len(), 1);
        assert!(gateway.commands(500).is_empty());
    }

    /// Tests a second ready event after a gateway re-identify.
    ///
    /// Expected: commands registered again, no second poll, poller not re-armed
    #[tokio::test]
    async fn later_ready_only_reregisters() {
        let gateway = FakeGateway::new().with_channel(600, 500);
        let config = Config::test(&[701]);
        let polling = AtomicBool::new(false);

        assert!(run(&gateway, &config, &polling).await);
        assert!(!run(&gateway, &config, &polling).await);

        let registrations = gateway
            .calls()
            .into_iter()
            .filter(|call| *call == "register_commands")
            .count();
        assert_eq!(registrations, 2);
        assert_eq!(gateway.sent().len(), 1);
        assert_eq!(gateway.lookups(), 1);
        assert_eq!(gateway.commands(500).len(), 1);
    }

    /// Tests registering the command list in the configured guild.
    ///
    /// Expected: true with a single `status` command registered
    #[tokio::test]
    async fn registers_status_command() {
        let gateway = FakeGateway::new();

        assert!(register_commands(&gateway, &Config::test(&[701])).await);

        let commands = gateway.commands(500);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0]["name"], "status");
    }

    /// Tests re-running registration with the same definitions.
    ///
    /// Expected: the command surface is identical after both runs
    #[tokio::test]
    async fn reregistration_keeps_command_surface() {
        let gateway = FakeGateway::new();
        let config = Config::test(&[701]);

        register_commands(&gateway, &config).await;
        let first = gateway.commands(500);
        register_commands(&gateway, &config).await;

        assert_eq!(gateway.commands(500), first);
    }

    /// Tests that a rejected registration is reported without panicking.
    ///
    /// Expected: false and nothing registered
    #[tokio::test]
    async fn reports_failed_registration() {
        let gateway = FakeGateway::new().rejecting_registration();

        assert!(!register_commands(&gateway, &Config::test(&[701])).await);
        assert!(gateway.commands(500).is_empty());
    }
}
