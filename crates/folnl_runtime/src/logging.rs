//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout carries only translations. The filter
//! comes from `FOLNL_LOG` (e.g. `FOLNL_LOG=folnl_parser=trace`), falling
//! back to the configured default.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{LOG_ENV_VAR, RuntimeConfig};

/// Builds the event filter from `FOLNL_LOG` or `fallback`.
#[must_use]
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config: &RuntimeConfig) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .without_time(),
        )
        .with(filter(&config.log_filter))
        .try_init();
}
