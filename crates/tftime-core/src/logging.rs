//! Tracing subscriber setup for provider binaries.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// ## Summary
/// Installs the global tracing subscriber using the configured level.
///
/// An invalid level falls back to `debug` and is reported once the
/// subscriber is running.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let (filter, invalid_level) = match EnvFilter::try_new(logging.level.as_str()) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("debug"), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    if invalid_level {
        tracing::warn!(level = %logging.level, "Invalid log level in config, using debug");
    }

    Ok(())
}
