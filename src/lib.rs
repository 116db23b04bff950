//! locale-fetch
//!
//! Fetches a locale-specific JSON translation document over HTTP, falling
//! back to a fixed language once if the requested one is unavailable, and
//! resolves dotted or slashed key paths into the fetched document.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use i18n::{Context, Dispatch, I18n, Resolver, Separator, Translator, i18n};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
