//! # parcego-core: Pure Rate Estimation Logic for Parcego
//!
//! This crate is the **heart** of the Parcego rate calculator. It contains
//! the pricing formula, weight validation and the estimate workflow as pure
//! code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Parcego Rate Calculator                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Calculator Page                              │   │
//! │  │    Weight field ──► Dropdowns ──► Get Estimate ──► Result card │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Calculator App                               │   │
//! │  │    set_weight, select_service, submit_estimate, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ parcego-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ workflow  │  │ validation│  │   │
//! │  │   │  Package  │  │  bands    │  │  Session  │  │  weight   │  │   │
//! │  │   │  Service  │  │  tables   │  │  phases   │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PackageType, ServiceTier, Weight, etc.)
//! - [`money`] - Money type rounded to cents
//! - [`pricing`] - The rate formula and its tables
//! - [`validation`] - Weight parsing and checks
//! - [`workflow`] - Calculator form and estimate state machine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use parcego_core::workflow::CalculatorSession;
//! use parcego_core::{PackageType, ServiceTier};
//!
//! let mut session = CalculatorSession::new();
//! session.set_weight_input("2");
//! session.select_package_type(PackageType::Pallet);
//! session.select_service_tier(ServiceTier::SameDay);
//!
//! let request = session.submit().unwrap();
//! // ... the host waits here ...
//! let result = session.complete(&request.id).unwrap();
//!
//! assert_eq!(result.cost.to_string(), "$196.00");
//! assert_eq!(result.delivery_time, "Today by 8 PM");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod workflow;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use workflow::{CalculatorSession, CalculatorSnapshot, EstimatePhase};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lightest weight the calculator will price, in kilograms.
pub const MIN_WEIGHT_KG: f64 = 0.1;

/// Default simulated latency between submit and completion, in milliseconds.
///
/// The host owns the timer; this is only the value it starts from.
pub const DEFAULT_ESTIMATE_LATENCY_MS: u64 = 600;
