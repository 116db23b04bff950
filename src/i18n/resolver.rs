//! Locale document retrieval
//!
//! The resolver fetches the document for the context's language and, if
//! that attempt fails for any reason, makes exactly one more attempt for the
//! fallback language. When both fail the first attempt's error is reported.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::FetchConfig;
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging;
use super::context::Context;
use super::translator::Translator;

/// HTTP retrieval of translation documents
#[derive(Debug, Clone)]
pub struct Resolver {
    client: Client,
    base_url: Option<Url>,
    fallback_language: String,
}

impl Resolver {
    /// Create a new Resolver instance
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| I18nError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url.as_deref().map(Url::parse).transpose()?;

        Ok(Self {
            client,
            base_url,
            fallback_language: config.fallback_language.clone(),
        })
    }

    /// Language retried when the requested one fails
    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    /// Turn a URL selector result into a request target.
    ///
    /// Absolute URLs are used as they are, relative ones are joined onto the
    /// configured base URL.
    pub fn target(&self, raw: &str) -> Result<Url> {
        match Url::parse(raw) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match self.base_url {
                Some(ref base) => Ok(base.join(raw)?),
                None => Err(I18nError::UrlParse(url::ParseError::RelativeUrlWithoutBase)),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the document for the context's language and build a translator.
    ///
    /// At most two requests are made, the second strictly after the first
    /// has failed.
    pub async fn resolve(&self, context: &Context) -> Result<Translator> {
        let language = context.language();

        let primary = match self.attempt(context, &language, false).await {
            Ok(document) => return Ok(self.translator(document, &language)),
            Err(e) => e,
        };

        logging::log_fallback(&language, &self.fallback_language, &primary.reason());
        let fallback = context.forced(&self.fallback_language);
        let fallback_language = fallback.language();

        match self.attempt(&fallback, &fallback_language, true).await {
            Ok(document) => Ok(self.translator(document, &fallback_language)),
            Err(e) => {
                debug!(error = %e, "Discarding fallback failure in favour of the primary one");
                logging::log_resolution_failure(&language, &primary);
                Err(primary)
            }
        }
    }

    async fn attempt(&self, context: &Context, language: &str, fallback: bool) -> Result<Value> {
        let raw = context.url(language);
        logging::log_fetch_attempt(language, &raw, fallback);

        let result = match self.target(&raw) {
            Ok(url) => self.fetch_document(url).await,
            Err(e) => Err(e),
        };
        if let Err(ref e) = result {
            logging::log_fetch_failure(language, &raw, e);
        }
        result
    }

    /// Single GET for a document; anything but `200 OK` is a failure
    pub async fn fetch_document(&self, url: Url) -> Result<Value> {
        let response = self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    I18nError::Timeout { url: url.to_string() }
                } else {
                    I18nError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(http_failure(status));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                I18nError::Timeout { url: url.to_string() }
            } else {
                I18nError::Transport(e.to_string())
            }
        })?;

        Ok(serde_json::from_str(&body)?)
    }

    fn translator(&self, document: Value, language: &str) -> Translator {
        info!(language = language, "Translation document loaded");
        Translator::new(document)
    }
}

/// Non-200 outcome; codes without a standard reason report the bare code
fn http_failure(status: StatusCode) -> I18nError {
    I18nError::Http {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or(status.as_str()).to_string(),
    }
}
