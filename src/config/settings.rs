//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchConfig,
    pub host: HostConfig,
    pub logging: LoggingConfig,
}

/// Locale document retrieval configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base that relative document URLs are joined onto
    pub base_url: Option<String>,
    pub fallback_language: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Values standing in for the host environment when no host is attached
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    pub language: String,
    /// When set, documents are addressed under `/bundles/<identifier>/`
    pub bundle_identifier: Option<String>,
    pub locales_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("LOCALE_FETCH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load settings from an explicit configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            host: HostConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            fallback_language: "en".to_string(),
            timeout_seconds: 10,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            bundle_identifier: None,
            locales_path: "assets/locales".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}
