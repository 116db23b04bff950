//! Configuration validation module
//!
//! This module provides validation functions for the configuration so that
//! misconfiguration is reported before any request is issued.

use crate::utils::errors::{I18nError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_fetch_config(&settings.fetch)?;
    validate_host_config(&settings.host)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate fetch configuration
fn validate_fetch_config(config: &super::FetchConfig) -> Result<()> {
    if config.fallback_language.trim().is_empty() {
        return Err(I18nError::Config(
            "Fallback language is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(I18nError::Config(
            "Fetch timeout must be greater than 0".to_string()
        ));
    }

    if let Some(ref base_url) = config.base_url {
        url::Url::parse(base_url).map_err(|e| {
            I18nError::Config(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
    }

    Ok(())
}

/// Validate host configuration
fn validate_host_config(config: &super::HostConfig) -> Result<()> {
    if config.locales_path.trim().is_empty() {
        return Err(I18nError::Config(
            "Locales path is required".to_string()
        ));
    }

    if let Some(ref identifier) = config.bundle_identifier {
        if identifier.trim().is_empty() {
            return Err(I18nError::Config(
                "Bundle identifier must not be blank".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
