//! Error types for logship
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for logship
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid shared key: {message}")]
    InvalidSharedKey { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Failed to fetch '{url}': HTTP {status}")]
    SourceFetch { url: String, status: u16 },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Conversion Errors
    // ============================================================================
    #[error("Failed to parse timestamp in column '{column}' at row {row}: '{value}'")]
    TimestampParse {
        column: String,
        row: usize,
        value: String,
    },

    #[error("CSV error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    // ============================================================================
    // Upload Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to use API. Response code: {status}\n Failed with message: {body}")]
    Api { status: u16, body: String },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad credentials or settings
    Config,
    /// The CSV resource could not be opened
    Source,
    /// The CSV content could not be converted
    Parse,
    /// Network-level failure talking to the ingestion endpoint
    Transport,
    /// The ingestion endpoint answered with a non-2xx status
    Api,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid shared key error
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidSharedKey {
            message: message.into(),
        }
    }

    /// Create an API status error
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a timestamp parse error
    pub fn timestamp(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        Self::TimestampParse {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidSharedKey { .. }
            | Error::YamlParse(_)
            | Error::JsonParse(_)
            | Error::InvalidUrl(_) => ErrorKind::Config,
            Error::SourceFetch { .. } | Error::FileNotFound { .. } | Error::Io(_) => {
                ErrorKind::Source
            }
            Error::TimestampParse { .. } | Error::Arrow(_) => ErrorKind::Parse,
            Error::Http(_) => ErrorKind::Transport,
            Error::Api { .. } => ErrorKind::Api,
        }
    }

    /// Check if a caller could reasonably retry the failed operation
    ///
    /// Nothing in this crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for logship
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("workspace_id");
        assert_eq!(err.to_string(), "Missing required config field: workspace_id");

        let err = Error::api(500, "Internal Server Error");
        assert_eq!(
            err.to_string(),
            "Failed to use API. Response code: 500\n Failed with message: Internal Server Error"
        );

        let err = Error::timestamp("event_time", 3, "yesterday");
        assert_eq!(
            err.to_string(),
            "Failed to parse timestamp in column 'event_time' at row 3: 'yesterday'"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::api(403, "").kind(), ErrorKind::Api);
        assert_eq!(Error::api(503, "").kind(), ErrorKind::Api);
        assert_eq!(Error::timestamp("t", 0, "x").kind(), ErrorKind::Parse);
        assert_eq!(Error::invalid_key("bad").kind(), ErrorKind::Config);
        assert_eq!(
            Error::FileNotFound {
                path: "a.csv".to_string()
            }
            .kind(),
            ErrorKind::Source
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::api(429, "").is_retryable());
        assert!(Error::api(500, "").is_retryable());
        assert!(Error::api(503, "").is_retryable());

        assert!(!Error::api(400, "").is_retryable());
        assert!(!Error::api(403, "").is_retryable());
        assert!(!Error::timestamp("t", 0, "x").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }
}
