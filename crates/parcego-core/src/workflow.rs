//! # Estimation Workflow
//!
//! The calculator form as a state machine: input fields, dropdown
//! selections, and the Idle → Computing → Settled estimate lifecycle.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            submit() ok                       complete(id)               │
//! │   ┌──────┐ ──────────────► ┌───────────┐ ──────────────► ┌─────────┐   │
//! │   │ Idle │                 │ Computing │                 │ Settled │   │
//! │   └──────┘ ◄── stays ───── └───────────┘ ◄────────────── └─────────┘   │
//! │      │     (bad weight)          │          submit() ok       │         │
//! │      │                           │                            │         │
//! │      └── submit() rejected ──────┤                            │         │
//! │          (InvalidWeight)         └── submit() rejected        │         │
//! │                                      (EstimateInFlight)       │         │
//! │                                                               │         │
//! │   Settled ── submit() with bad weight ──► stays Settled ──────┘         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timing Lives Outside
//! This module never sleeps. `submit()` captures an [`EstimateRequest`] and
//! returns it; the host waits however long it likes and then calls
//! `complete()` with the request ID. A completion whose ID does not match
//! the request in flight is rejected and changes nothing.
//!
//! ## Selections Never Recompute
//! Picking a different package type or service tier after an estimate has
//! settled leaves the displayed result alone. Only another submit produces
//! a new result.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing;
use crate::types::{EstimateRequest, EstimateResult, PackageType, SelectMenu, ServiceTier};
use crate::validation::{soft_weight_message, validate_weight, SUBMIT_WEIGHT_MESSAGE};

/// Submit button label before the first estimate.
pub const LABEL_GET_ESTIMATE: &str = "Get Estimate";

/// Submit button label once an estimate has been shown.
pub const LABEL_UPDATE_ESTIMATE: &str = "Update Estimate";

/// Submit button label while computing.
pub const LABEL_CALCULATING: &str = "Calculating...";

// =============================================================================
// Estimate Phase
// =============================================================================

/// Where the estimate lifecycle currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EstimatePhase {
    /// No estimate requested yet.
    #[default]
    Idle,
    /// A request was captured and is waiting for completion.
    Computing(EstimateRequest),
    /// The latest estimate is available.
    Settled(EstimateResult),
}

impl EstimatePhase {
    /// The phase name without its payload.
    pub fn kind(&self) -> PhaseKind {
        match self {
            EstimatePhase::Idle => PhaseKind::Idle,
            EstimatePhase::Computing(_) => PhaseKind::Computing,
            EstimatePhase::Settled(_) => PhaseKind::Settled,
        }
    }
}

/// Phase name as sent to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Idle,
    Computing,
    Settled,
}

// =============================================================================
// Calculator Snapshot
// =============================================================================

/// Everything the page needs to render the calculator, in one value.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSnapshot {
    pub origin: String,
    pub destination: String,
    pub weight_input: String,
    pub weight_message: Option<String>,
    pub package_type: PackageType,
    pub service_tier: ServiceTier,
    pub open_menu: Option<SelectMenu>,
    pub phase: PhaseKind,
    pub submit_label: String,
    pub submit_enabled: bool,
    /// The settled estimate. Always `None` while computing.
    pub result: Option<EstimateResult>,
}

// =============================================================================
// Calculator Session
// =============================================================================

/// One user's calculator form.
///
/// ## Invariants
/// - At most one estimate is in flight
/// - At most one dropdown menu is open
/// - `weight_input` is never rewritten by validation
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    origin: String,
    destination: String,
    weight_input: String,
    weight_message: Option<&'static str>,
    package_type: PackageType,
    service_tier: ServiceTier,
    open_menu: Option<SelectMenu>,
    phase: EstimatePhase,
    has_calculated: bool,
}

impl CalculatorSession {
    /// Creates an empty form with the default selections (Box, Standard).
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Records the origin text. Free text, not used for pricing.
    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    /// Records the destination text. Free text, not used for pricing.
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Records the weight text exactly as typed and refreshes the inline
    /// message.
    pub fn set_weight_input(&mut self, raw: impl Into<String>) {
        self.weight_input = raw.into();
        self.weight_message = soft_weight_message(&self.weight_input);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Picks a package type and closes the open menu.
    pub fn select_package_type(&mut self, package_type: PackageType) {
        self.package_type = package_type;
        self.open_menu = None;
    }

    /// Picks a service tier and closes the open menu.
    pub fn select_service_tier(&mut self, service_tier: ServiceTier) {
        self.service_tier = service_tier;
        self.open_menu = None;
    }

    /// Opens `menu` (closing the other one), or closes it if already open.
    pub fn toggle_menu(&mut self, menu: SelectMenu) {
        self.open_menu = if self.open_menu == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    /// Closes whichever menu is open (a click outside both dropdowns).
    pub fn close_menus(&mut self) {
        self.open_menu = None;
    }

    // -------------------------------------------------------------------------
    // Estimate Lifecycle
    // -------------------------------------------------------------------------

    /// Validates the weight and captures an estimate request.
    ///
    /// ## Errors
    /// - [`CoreError::EstimateInFlight`] while computing (nothing changes)
    /// - [`CoreError::InvalidWeight`] if the weight text is rejected; the
    ///   submit message is shown and the phase is left as it was
    pub fn submit(&mut self) -> CoreResult<EstimateRequest> {
        if self.is_computing() {
            return Err(CoreError::EstimateInFlight);
        }

        let weight = match validate_weight(&self.weight_input) {
            Ok(weight) => weight,
            Err(e) => {
                self.weight_message = Some(SUBMIT_WEIGHT_MESSAGE);
                return Err(e.into());
            }
        };

        self.weight_message = None;
        let request = EstimateRequest::new(weight, self.package_type, self.service_tier);
        self.phase = EstimatePhase::Computing(request.clone());
        Ok(request)
    }

    /// Prices the request in flight and settles the estimate.
    ///
    /// ## Errors
    /// [`CoreError::StaleCompletion`] if `request_id` is not the request in
    /// flight. The session is left untouched.
    pub fn complete(&mut self, request_id: &str) -> CoreResult<EstimateResult> {
        let result = match &self.phase {
            EstimatePhase::Computing(request) if request.id == request_id => {
                pricing::estimate(request)
            }
            _ => {
                return Err(CoreError::StaleCompletion {
                    request_id: request_id.to_string(),
                })
            }
        };

        self.phase = EstimatePhase::Settled(result.clone());
        self.has_calculated = true;
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> &EstimatePhase {
        &self.phase
    }

    pub fn is_computing(&self) -> bool {
        matches!(self.phase, EstimatePhase::Computing(_))
    }

    /// The estimate to display. Hidden while a new one is computing.
    pub fn visible_result(&self) -> Option<&EstimateResult> {
        match &self.phase {
            EstimatePhase::Settled(result) => Some(result),
            _ => None,
        }
    }

    pub fn weight_input(&self) -> &str {
        &self.weight_input
    }

    pub fn weight_message(&self) -> Option<&'static str> {
        self.weight_message
    }

    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    pub fn service_tier(&self) -> ServiceTier {
        self.service_tier
    }

    pub fn open_menu(&self) -> Option<SelectMenu> {
        self.open_menu
    }

    pub fn has_calculated(&self) -> bool {
        self.has_calculated
    }

    /// Text of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_computing() {
            LABEL_CALCULATING
        } else if self.has_calculated {
            LABEL_UPDATE_ESTIMATE
        } else {
            LABEL_GET_ESTIMATE
        }
    }

    /// Captures the whole form for rendering.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            weight_input: self.weight_input.clone(),
            weight_message: self.weight_message.map(str::to_string),
            package_type: self.package_type,
            service_tier: self.service_tier,
            open_menu: self.open_menu,
            phase: self.phase.kind(),
            submit_label: self.submit_label().to_string(),
            submit_enabled: !self.is_computing(),
            result: self.visible_result().cloned(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
