//! Mock locale server for testing
//!
//! This module provides a mock HTTP server serving translation documents
//! under `/locales/translation.<language>.json`. It uses wiremock to create
//! configurable mock responses.

use std::time::Duration;

use locale_fetch::Context;
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock locale host for testing
pub struct LocaleMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: Option<String>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            body: Some(front_document().to_string()),
        }
    }
}

impl MockResponseConfig {
    /// Successful response carrying `document`
    pub fn document(document: &Value) -> Self {
        Self {
            body: Some(document.to_string()),
            ..Self::default()
        }
    }

    /// Empty response with `status`
    pub fn status(status: u16) -> Self {
        Self {
            status,
            delay_ms: None,
            body: None,
        }
    }

    /// `200 OK` with a body that is not JSON
    pub fn malformed() -> Self {
        Self {
            body: Some("{ \"#front\": ".to_string()),
            ..Self::default()
        }
    }
}

impl LocaleMockServer {
    /// Create a new mock locale server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}/locales/translation.{{language}}.json", server.uri());

        Self { server, base_url }
    }

    /// Document URL for a language
    pub fn document_url(&self, language: &str) -> String {
        self.base_url.replace("{language}", language)
    }

    /// Context requesting `language` from this server
    pub fn context(&self, language: &str) -> Context {
        Context::fixed(language, self.base_url.clone())
    }

    /// Setup mock for the document of one language
    pub async fn mock_document(&self, language: &str, config: MockResponseConfig) {
        self.mock_path(&format!("/locales/translation.{}.json", language), config).await;
    }

    /// Setup mock for an arbitrary path
    pub async fn mock_path(&self, document_path: &str, config: MockResponseConfig) {
        let mut response = ResponseTemplate::new(config.status);
        if let Some(body) = config.body {
            response = response.set_body_raw(body, "application/json");
        }

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }

        Mock::given(method("GET"))
            .and(path(document_path))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Paths of every request received, in arrival order
    pub async fn requested_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| req.url.path().to_string())
            .collect()
    }
}

/// Path a document for `language` is requested under
pub fn document_path(language: &str) -> String {
    format!("/locales/translation.{}.json", language)
}

/// The `{"#front": {"greeting": "Hello World!"}}` document
pub fn front_document() -> Value {
    serde_json::json!({ "#front": { "greeting": "Hello World!" } })
}

/// English fixture document
pub fn english_document() -> Value {
    serde_json::from_str(include_str!("../fixtures/translation.en.json")).unwrap()
}

/// German fixture document
pub fn german_document() -> Value {
    serde_json::from_str(include_str!("../fixtures/translation.de.json")).unwrap()
}
