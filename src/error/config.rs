use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A Discord ID could not be parsed as a snowflake.
    ///
    /// Occurs when an ID is left at its placeholder value or contains anything
    /// other than a non-zero unsigned integer.
    #[error("Invalid Discord ID '{value}' for {name}")]
    InvalidId {
        /// The configuration key the value was read for
        name: String,
        /// The value that failed to parse
        value: String,
        /// The underlying parse error, absent when the value parsed as zero
        #[source]
        source: Option<ParseIntError>,
    },

    /// The poll interval is not a positive number of seconds.
    #[error("Invalid check interval '{0}', expected a positive number of seconds")]
    InvalidInterval(String),

    /// No bots are configured for monitoring.
    #[error("No monitored bot IDs configured")]
    NoMonitoredBots,
}
