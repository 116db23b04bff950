//! locale-fetch
//!
//! Command line entry point: fetches the translation document for the
//! configured host and prints the requested keys as JSON.

use anyhow::Context as _;
use tracing::{info, warn};

use locale_fetch::{config::Settings, utils::logging, I18n};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", locale_fetch::info());

    let i18n = I18n::from_settings(&settings)?;
    let t = i18n
        .translator(None)
        .await
        .with_context(|| format!("fetching translations for '{}'", i18n.context().language()))?;

    let keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        println!("{}", serde_json::to_string_pretty(t.document())?);
        return Ok(());
    }

    for key in &keys {
        match t.get(key) {
            Some(value) => println!("{}\t{}", key, value),
            None => {
                warn!(key = %key, "Translation key not found");
                println!("{}\t<missing>", key);
            }
        }
    }

    Ok(())
}
