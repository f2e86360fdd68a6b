mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use std::sync::Arc;

use dioxus_logger::tracing::{self, Level};

use crate::{bot::start, config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Arc::new(Config::from_env()?);

    tracing::info!(
        "Monitoring {} bot(s) in guild {}, alerts to channel {}",
        config.monitored_bots.len(),
        config.guild_id,
        config.alert_channel_id
    );

    let client = start::init_bot(config).await?;

    start::start_bot(client).await
}
