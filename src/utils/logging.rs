//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured events
//! emitted around locale document retrieval.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{I18nError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped and must be
/// held for as long as logging is needed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "locale-fetch.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| I18nError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a single document request
pub fn log_fetch_attempt(language: &str, url: &str, fallback: bool) {
    debug!(
        language = language,
        url = url,
        fallback = fallback,
        "Requesting locale document"
    );
}

/// Log a failed document request
pub fn log_fetch_failure(language: &str, url: &str, error: &I18nError) {
    warn!(
        language = language,
        url = url,
        error = %error,
        "Locale document request failed"
    );
}

/// Log the switch from the requested language to the fallback language
pub fn log_fallback(requested: &str, fallback: &str, reason: &str) {
    warn!(
        requested = requested,
        fallback = fallback,
        reason = reason,
        "Retrying with fallback language"
    );
}

/// Log a permanent failure after the fallback attempt
pub fn log_resolution_failure(language: &str, error: &I18nError) {
    error!(
        language = language,
        error = %error,
        severity = %error.severity(),
        "Locale document unavailable"
    );
}
