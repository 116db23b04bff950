//! Simple test infrastructure for basic testing

use std::sync::Once;

use locale_fetch::config::{FetchConfig, Settings};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("locale_fetch=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Settings pointing relative document URLs at `base_url`
pub fn test_settings(base_url: &str) -> Settings {
    Settings {
        fetch: FetchConfig {
            base_url: Some(base_url.to_string()),
            timeout_seconds: 2,
            ..FetchConfig::default()
        },
        ..Settings::default()
    }
}
