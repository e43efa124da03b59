//! Tracing Setup
//!
//! Initializes the `tracing` subscriber from [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; takes priority over `logging.level`
//! - `logging.format`: `json`, `pretty` or `compact`
//!
//! Events are written to stderr so stdout stays free for results.
//!
//! # Usage
//!
//! ```rust,ignore
//! use combination_engine::telemetry::init_tracing;
//!
//! init_tracing(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Error type for tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{level}': {message}")]
    InvalidFilter {
        /// The configured level.
        level: String,
        /// Parser message.
        message: String,
    },
    /// A global subscriber is already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Build the filter, preferring `RUST_LOG` over the configured level.
pub fn build_filter(logging: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&logging.level).map_err(|e| TelemetryError::InvalidFilter {
        level: logging.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(logging)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| TelemetryError::SubscriberError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filter_from_config_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let logging = LoggingConfig {
            level: "combination_engine=debug".to_string(),
            format: LogFormat::Compact,
        };
        assert!(build_filter(&logging).is_ok());
    }

    #[test]
    fn rejects_invalid_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let logging = LoggingConfig {
            level: "combination_engine=[".to_string(),
            format: LogFormat::Json,
        };
        assert!(matches!(
            build_filter(&logging),
            Err(TelemetryError::InvalidFilter { .. })
        ));
    }
}
