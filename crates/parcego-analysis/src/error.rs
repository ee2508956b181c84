//! # Analysis Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Analysis Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  MissingApiKey  │  │  Network        │  │  Http                   │ │
//! │  │  InvalidConfig  │  │                 │  │  Parse                  │ │
//! │  │  Disabled       │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  All of them end the same way for the user: the fallback advice text.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Everything that can go wrong while analysing a description.
#[derive(Debug, Error)]
pub enum AnalysisError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// No API key was configured.
    #[error("Analysis API key not configured. Set PARCEGO_API_KEY or API_KEY.")]
    MissingApiKey,

    /// Configuration values are unusable.
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),

    /// Analysis was switched off by configuration.
    #[error("Package analysis is disabled")]
    Disabled,

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The service answered with a non-success status.
    #[error("Analysis service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The service answered with something other than the expected JSON.
    #[error("Failed to parse analysis response: {0}")]
    Parse(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter
        AnalysisError::Network(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for AnalysisError {
    fn from(err: url::ParseError) -> Self {
        AnalysisError::InvalidConfig(format!("invalid base URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = AnalysisError::Http {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Analysis service returned HTTP 429: quota exceeded");
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(AnalysisError::from(json_err), AnalysisError::Parse(_)));
    }

    #[test]
    fn test_url_error_converts_to_invalid_config() {
        let url_err = url::Url::parse("::nope").unwrap_err();
        let err = AnalysisError::from(url_err);
        assert!(err.to_string().starts_with("Invalid analysis configuration: invalid base URL"));
    }
}
