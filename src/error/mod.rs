//! Error types for the presence monitor.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Errors
//! reaching `main` abort startup; errors raised inside a poll cycle or an event
//! handler are logged and never stop the process.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion so `?` can be used
/// across the configuration, Discord and scheduler layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
