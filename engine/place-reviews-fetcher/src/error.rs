//! Error types for the place reviews fetcher

use thiserror::Error;

/// Result type alias for fetcher operations
pub type Result<T> = std::result::Result<T, FetcherError>;

/// Errors that terminate a fetch-and-persist run
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Required environment value is missing or empty
    #[error("Missing required environment variable {name}")]
    MissingConfig { name: String },

    /// Configuration value present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP layer answered with a non-success status
    #[error("HTTP error from Google Places API: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// HTTP succeeded but the API's own status field is not "OK"
    #[error("Google Places API returned status: {status} {}", .message.as_deref().unwrap_or(""))]
    UpstreamStatus { status: String, message: Option<String> },

    /// Connection failures and undecodable response bodies
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetcherError {
    /// Create a new missing configuration error
    pub fn missing_config(name: impl Into<String>) -> Self {
        Self::MissingConfig { name: name.into() }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_names_variable() {
        let err = FetcherError::missing_config("PLACE_ID");
        assert_eq!(err.to_string(), "Missing required environment variable PLACE_ID");
    }

    #[test]
    fn test_http_status_includes_code_and_reason() {
        let err =
            FetcherError::HttpStatus { status: 500, reason: "Internal Server Error".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Server Error"));
    }

    #[test]
    fn test_upstream_status_includes_status_and_message() {
        let err = FetcherError::UpstreamStatus {
            status: "REQUEST_DENIED".to_string(),
            message: Some("bad key".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("REQUEST_DENIED"));
        assert!(msg.contains("bad key"));

        let err =
            FetcherError::UpstreamStatus { status: "ZERO_RESULTS".to_string(), message: None };
        assert!(err.to_string().contains("ZERO_RESULTS"));
    }
}
