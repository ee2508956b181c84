//! # Domain Types
//!
//! Core domain types used throughout the rate calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PackageType    │   │  ServiceTier    │   │     Weight      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Box      ×1.0  │   │  Standard ×1.0  │   │  kg (f64)       │       │
//! │  │  Envelope ×0.7  │   │  Express  ×1.6  │   │  ≥ 0.1, finite  │       │
//! │  │  Pallet   ×3.5  │   │  SameDay  ×2.8  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │            │                    │                     │                 │
//! │            └────────────────────┼─────────────────────┘                 │
//! │                                 ▼                                       │
//! │                       ┌─────────────────┐                               │
//! │                       │ EstimateRequest │  captured at submit           │
//! │                       └────────┬────────┘                               │
//! │                                ▼                                        │
//! │                       ┌─────────────────┐                               │
//! │                       │ EstimateResult  │  cost + delivery time         │
//! │                       └─────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Multipliers and delivery times live in [`crate::pricing`], not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::MIN_WEIGHT_KG;

// =============================================================================
// Package Type
// =============================================================================

/// The kind of parcel being shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    /// Standard cardboard box (the default selection).
    #[default]
    Box,
    /// Documents and flat items.
    Envelope,
    /// Palletised freight.
    Pallet,
}

impl PackageType {
    /// Every package type, in the order the dropdown lists them.
    pub const ALL: [PackageType; 3] = [PackageType::Box, PackageType::Envelope, PackageType::Pallet];

    /// Display name shown in the dropdown and the result card.
    pub const fn label(&self) -> &'static str {
        match self {
            PackageType::Box => "Box",
            PackageType::Envelope => "Envelope",
            PackageType::Pallet => "Pallet",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PackageType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "box" => Ok(PackageType::Box),
            "envelope" => Ok(PackageType::Envelope),
            "pallet" => Ok(PackageType::Pallet),
            _ => Err(unknown_option("package type", s, PackageType::ALL.iter().map(|p| p.label()))),
        }
    }
}

// =============================================================================
// Service Tier
// =============================================================================

/// Delivery speed requested by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    /// 2-4 business days (the default selection).
    #[default]
    Standard,
    /// 1-2 business days.
    Express,
    /// Delivered today by 8 PM.
    SameDay,
}

impl ServiceTier {
    /// Every service tier, in the order the dropdown lists them.
    pub const ALL: [ServiceTier; 3] = [ServiceTier::Standard, ServiceTier::Express, ServiceTier::SameDay];

    /// Display name shown in the dropdown and the result card.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "Standard",
            ServiceTier::Express => "Express",
            ServiceTier::SameDay => "Same Day",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceTier {
    type Err = CoreError;

    /// Accepts the display name ("Same Day") as well as the JSON form
    /// ("same_day"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        match normalized.as_str() {
            "standard" => Ok(ServiceTier::Standard),
            "express" => Ok(ServiceTier::Express),
            "sameday" => Ok(ServiceTier::SameDay),
            _ => Err(unknown_option("service", s, ServiceTier::ALL.iter().map(|t| t.label()))),
        }
    }
}

fn unknown_option<'a>(field: &str, value: &str, allowed: impl Iterator<Item = &'a str>) -> CoreError {
    CoreError::UnknownOption {
        field: field.to_string(),
        value: value.to_string(),
        allowed: allowed.map(str::to_string).collect(),
    }
}

// =============================================================================
// Weight
// =============================================================================

/// A validated package weight in kilograms.
///
/// ## Invariant
/// Always finite and `>= MIN_WEIGHT_KG` (0.1 kg). There is no upper bound
/// and no rounding: `2.345` stays `2.345`.
///
/// The only ways to obtain one are [`Weight::try_from_kg`] and
/// [`crate::validation::validate_weight`], which share the same predicate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Weight(f64);

impl Weight {
    /// Returns true if `kg` is an acceptable package weight.
    ///
    /// This is the single numeric predicate behind both the inline
    /// (keystroke) message and the submit-time check.
    #[inline]
    pub fn is_acceptable(kg: f64) -> bool {
        kg.is_finite() && kg >= MIN_WEIGHT_KG
    }

    /// Wraps a numeric weight after checking it.
    ///
    /// ## Example
    /// ```rust
    /// use parcego_core::types::Weight;
    ///
    /// assert_eq!(Weight::try_from_kg(2.5).unwrap().kg(), 2.5);
    /// assert!(Weight::try_from_kg(0.05).is_err());
    /// assert!(Weight::try_from_kg(f64::INFINITY).is_err());
    /// ```
    pub fn try_from_kg(kg: f64) -> Result<Self, ValidationError> {
        if Self::is_acceptable(kg) {
            Ok(Weight(kg))
        } else {
            Err(ValidationError::InvalidWeight {
                raw: kg.to_string(),
                min: MIN_WEIGHT_KG,
            })
        }
    }

    /// Returns the weight in kilograms.
    #[inline]
    pub const fn kg(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kg", self.0)
    }
}

// =============================================================================
// Estimate Request
// =============================================================================

/// The inputs of one estimate, frozen at the moment the user submits.
///
/// ## Snapshot Pattern
/// Changing the dropdowns or the weight field after submitting does not
/// touch this value: the computation that is in flight prices exactly what
/// was on screen when the button was pressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    /// Unique identifier (UUID v4), used to match the completion.
    pub id: String,

    /// Validated weight.
    pub weight: Weight,

    /// Package type selected at submit time.
    pub package_type: PackageType,

    /// Service tier selected at submit time.
    pub service_tier: ServiceTier,
}

impl EstimateRequest {
    /// Creates a request with a fresh ID.
    pub fn new(weight: Weight, package_type: PackageType, service_tier: ServiceTier) -> Self {
        EstimateRequest {
            id: Uuid::new_v4().to_string(),
            weight,
            package_type,
            service_tier,
        }
    }
}

// =============================================================================
// Estimate Result
// =============================================================================

/// A computed estimate, as shown on the result card.
///
/// Created only by [`crate::pricing::estimate`] and replaced wholesale by
/// the next successful estimate; never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    /// ID of the request this result answers.
    pub request_id: String,

    /// Estimated cost, rounded to the cent.
    pub cost: Money,

    /// Delivery time label, e.g. "1-2 business days".
    pub delivery_time: String,

    /// Service tier the estimate was computed for.
    pub service_tier: ServiceTier,

    /// Weight the estimate was computed for.
    pub weight: Weight,

    /// Package type the estimate was computed for.
    pub package_type: PackageType,
}

impl EstimateResult {
    /// Cost with two decimals and no symbol, e.g. `"196.00"`.
    pub fn cost_string(&self) -> String {
        self.cost.amount_string()
    }

    /// Footer line of the result card, e.g. `"Based on 2.5kg Box"`.
    ///
    /// Built from the captured request, so it never drifts when the form
    /// changes after the estimate settles.
    pub fn basis_line(&self) -> String {
        format!("Based on {} {}", self.weight, self.package_type)
    }
}

// =============================================================================
// Select Menu
// =============================================================================

/// The two dropdowns of the calculator form. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SelectMenu {
    Package,
    Service,
}

// =============================================================================
// Unit Tests
// =============================================================================
