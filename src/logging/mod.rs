// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Output format of log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines for an operator at a terminal
    #[default]
    Pretty,
    /// One JSON object per event, for log collectors
    Json,
}

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the event filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize the tracing subscriber for structured logging
///
/// Events go to stdout, filtered by `RUST_LOG` (default `info`).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed, so calling
/// this twice (e.g. from tests) is harmless.
///
/// # Examples
///
/// ```
/// use logomark::logging::{init_subscriber, LogFormat};
///
/// init_subscriber(LogFormat::Pretty).ok();
/// tracing::info!("Watermarking started");
/// ```
pub fn init_subscriber(format: LogFormat) -> Result<(), Box<dyn Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
}
