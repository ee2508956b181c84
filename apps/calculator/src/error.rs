//! # API Error Type
//!
//! The error shape every command returns to the page.
//!
//! ## Serialized Form
//! ```text
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "Please enter a valid weight (min 0.1 kg)"
//! }
//! ```
//!
//! The page switches on `code` and shows `message` as is, so messages are
//! written for the customer, not for logs.

use serde::Serialize;

use parcego_core::validation::SUBMIT_WEIGHT_MESSAGE;
use parcego_core::CoreError;

/// Error returned by commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable category.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error categories the page understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// User input was rejected (weight, option names, console syntax).
    ValidationError,

    /// A submit arrived while an estimate was computing.
    EstimateInFlight,

    /// A completion arrived for a request that is no longer in flight.
    StaleEstimate,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidWeight(_) => ApiError::validation(SUBMIT_WEIGHT_MESSAGE),
            CoreError::EstimateInFlight => ApiError::new(
                ErrorCode::EstimateInFlight,
                "An estimate is already being calculated",
            ),
            CoreError::StaleCompletion { request_id } => {
                tracing::warn!(request_id = %request_id, "Dropped stale estimate completion");
                ApiError::new(ErrorCode::StaleEstimate, "Estimate was superseded")
            }
            CoreError::UnknownOption { .. } => ApiError::validation(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
