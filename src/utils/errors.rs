//! Error handling for locale-fetch
//!
//! This module defines the error type shared by the resolver, the dispatch
//! layer and the configuration loader, plus a small classification API.

use thiserror::Error;

/// Main error type for locale document retrieval
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

/// Result type alias for locale-fetch operations
pub type Result<T> = std::result::Result<T, I18nError>;

impl I18nError {
    /// Failure reason as surfaced to callers.
    ///
    /// HTTP failures report the bare status text (`"Not Found"`), everything
    /// else its display message.
    pub fn reason(&self) -> String {
        match self {
            I18nError::Http { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::InvalidArgument(_) => false,
            I18nError::Transport(_) => true,
            I18nError::Timeout { .. } => true,
            I18nError::Http { status, .. } => *status >= 500 || *status == 429,
            I18nError::Parse(_) => false,
            I18nError::UrlParse(_) => false,
            I18nError::Config(_) => false,
            I18nError::ConfigLoad(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            I18nError::Config(_) => ErrorSeverity::Critical,
            I18nError::ConfigLoad(_) => ErrorSeverity::Critical,
            I18nError::InvalidArgument(_) => ErrorSeverity::Info,
            I18nError::Http { status, .. } if *status < 500 => ErrorSeverity::Warning,
            I18nError::Timeout { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_reason_is_status_text() {
        let error = I18nError::Http { status: 404, reason: "Not Found".to_string() };
        assert_eq!(error.reason(), "Not Found");
        assert_eq!(error.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_reason_falls_back_to_display() {
        let error = I18nError::Transport("connection refused".to_string());
        assert_eq!(error.reason(), "Transport error: connection refused");
    }

    #[test]
    fn test_classification() {
        let not_found = I18nError::Http { status: 404, reason: "Not Found".to_string() };
        let unavailable = I18nError::Http { status: 503, reason: "Service Unavailable".to_string() };

        assert!(!not_found.is_recoverable());
        assert!(unavailable.is_recoverable());
        assert_eq!(not_found.severity(), ErrorSeverity::Warning);
        assert_eq!(unavailable.severity(), ErrorSeverity::Error);
        assert_eq!(I18nError::Config("x".into()).severity(), ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");

        let load = I18nError::from(config::ConfigError::NotFound("fetch.base_url".into()));
        assert!(!load.is_recoverable());
        assert_eq!(load.severity(), ErrorSeverity::Critical);
    }
}
