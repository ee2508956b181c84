//! # Error Types
//!
//! Domain-specific error types for parcego-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parcego-core errors (this file)                                       │
//! │  ├── CoreError        - Workflow / selection errors                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  parcego-analysis errors (separate crate)                              │
//! │  └── AnalysisError    - Never reaches the calculator (fallback text)   │
//! │                                                                         │
//! │  Calculator app errors                                                 │
//! │  └── ApiError         - What the page sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Page                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the rejected text, the request id)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// The estimator has exactly one *user* failure mode (a bad weight). The
/// other variants describe events arriving in the wrong phase, which the
/// host can ignore safely.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The weight field does not hold a usable weight at submission time.
    ///
    /// ## User Workflow
    /// ```text
    /// Weight field: "abc"
    ///      │
    ///      ▼
    /// submit()
    ///      │
    ///      ▼
    /// InvalidWeight ──► UI shows "Please enter a valid weight (min 0.1 kg)"
    ///      │
    ///      ▼
    /// Workflow phase unchanged
    /// ```
    #[error("Invalid weight input: {0}")]
    InvalidWeight(#[from] ValidationError),

    /// A submission arrived while an estimate is still computing.
    ///
    /// The submit button is disabled during `Computing`, so this only
    /// happens when a second caller races the first.
    #[error("An estimate is already being calculated")]
    EstimateInFlight,

    /// A completion arrived for a request that is not the one in flight.
    #[error("No estimate in flight for request {request_id}")]
    StaleCompletion { request_id: String },

    /// A package type or service tier name that the calculator does not offer.
    #[error("{field} must be one of: {allowed:?}, got '{value}'")]
    UnknownOption {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Weight text is not a number, is not finite, or is below the minimum.
    #[error("'{raw}' is not a valid weight (min {min} kg)")]
    InvalidWeight { raw: String, min: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
