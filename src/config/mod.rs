//! Configuration management module
//!
//! This module handles loading and validation of configuration
//! from files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{Settings, FetchConfig, HostConfig, LoggingConfig};
