use std::sync::Arc;

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    bot::gateway::DiscordGateway, config::Config, error::AppError, service::alert::AlertService,
};

/// Starts the presence poll scheduler
///
/// The job runs every `config.check_interval` and posts an alert for each
/// monitored bot found offline. Runs are independent: a slow cycle does not delay
/// or block the next one.
///
/// # Arguments
/// - `gateway`: Discord gateway used by every cycle
/// - `config`: Shared configuration
pub async fn start_scheduler<G>(gateway: G, config: Arc<Config>) -> Result<(), AppError>
where
    G: DiscordGateway + Clone + 'static,
{
    let scheduler = JobScheduler::new().await?;

    let interval = config.check_interval;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let gateway = gateway.clone();
        let config = config.clone();

        Box::pin(async move {
            run_poll_cycle(&gateway, &config).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Presence poll scheduler started, checking every {}s",
        interval.as_secs()
    );

    Ok(())
}

/// Runs one poll cycle, logging instead of propagating failures so the schedule
/// keeps going.
pub async fn run_poll_cycle<G: DiscordGateway>(gateway: &G, config: &Config) {
    match AlertService::new(gateway, config).check_bots().await {
        Ok(sent) => tracing::debug!("Presence poll complete, {} alert(s) sent", sent),
        Err(e) => tracing::error!("Presence poll aborted, alert channel unavailable: {}", e),
    }
}
