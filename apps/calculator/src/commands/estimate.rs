//! # Estimate Commands
//!
//! Commands behind the calculator form.
//!
//! ## Estimate Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  set_weight / select_package / select_service / toggle_menu            │
//! │        │           (any time, never recompute)                          │
//! │        ▼                                                                │
//! │  submit_estimate ──► lock, submit(), unlock                             │
//! │        │                 │                                              │
//! │        │                 └── rejected ──► ApiError (form unchanged)     │
//! │        ▼                                                                │
//! │  sleep(latency)          button shows "Calculating..."                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  lock, complete(id), unlock ──► EstimateView                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use parcego_core::{CalculatorSnapshot, EstimateResult, PackageType, SelectMenu, ServiceTier};

use crate::config::EstimatorSettings;
use crate::error::ApiError;
use crate::events::EstimateEventEmitter;
use crate::state::{ConfigState, SessionState};

/// Small print under every estimate.
pub const TAXES_NOTE: &str = "Taxes calculated at checkout";

/// The result card, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateView {
    /// Raw result from the pricing engine.
    pub result: EstimateResult,

    /// Cost with the configured currency symbol, e.g. "$196.00".
    pub cost_display: String,

    /// e.g. "Parcego • Same Day"
    pub headline: String,

    /// e.g. "Based on 2kg Pallet"
    pub basis_line: String,

    pub taxes_note: String,

    pub settled_at: DateTime<Utc>,
}

impl EstimateView {
    pub fn new(result: EstimateResult, settings: &EstimatorSettings) -> Self {
        EstimateView {
            cost_display: result.cost.format_with(&settings.currency_symbol),
            headline: format!("{} • {}", settings.brand_name, result.service_tier),
            basis_line: result.basis_line(),
            taxes_note: TAXES_NOTE.to_string(),
            settled_at: Utc::now(),
            result,
        }
    }
}

/// Gets the whole calculator form.
pub fn get_calculator(session: &SessionState) -> CalculatorSnapshot {
    debug!("get_calculator command");
    session.with_session(|s| s.snapshot())
}

/// Records the weight text as typed.
///
/// Never fails: a bad weight only sets the inline message.
pub fn set_weight(session: &SessionState, weight: String) -> CalculatorSnapshot {
    debug!(weight = %weight, "set_weight command");
    session.with_session_mut(|s| {
        s.set_weight_input(weight);
        s.snapshot()
    })
}

/// Records the origin text.
pub fn set_origin(session: &SessionState, origin: String) -> CalculatorSnapshot {
    debug!("set_origin command");
    session.with_session_mut(|s| {
        s.set_origin(origin);
        s.snapshot()
    })
}

/// Records the destination text.
pub fn set_destination(session: &SessionState, destination: String) -> CalculatorSnapshot {
    debug!("set_destination command");
    session.with_session_mut(|s| {
        s.set_destination(destination);
        s.snapshot()
    })
}

/// Selects a package type by name ("Box", "envelope", ...).
pub fn select_package(session: &SessionState, package_type: &str) -> Result<CalculatorSnapshot, ApiError> {
    debug!(package_type = %package_type, "select_package command");
    let package_type: PackageType = package_type.parse()?;
    Ok(session.with_session_mut(|s| {
        s.select_package_type(package_type);
        s.snapshot()
    }))
}

/// Selects a service tier by name ("Standard", "Same Day", "same_day", ...).
pub fn select_service(session: &SessionState, service_tier: &str) -> Result<CalculatorSnapshot, ApiError> {
    debug!(service_tier = %service_tier, "select_service command");
    let service_tier: ServiceTier = service_tier.parse()?;
    Ok(session.with_session_mut(|s| {
        s.select_service_tier(service_tier);
        s.snapshot()
    }))
}

/// Opens or closes one of the dropdowns.
pub fn toggle_menu(session: &SessionState, menu: SelectMenu) -> CalculatorSnapshot {
    debug!(?menu, "toggle_menu command");
    session.with_session_mut(|s| {
        s.toggle_menu(menu);
        s.snapshot()
    })
}

/// Closes any open dropdown.
pub fn close_menus(session: &SessionState) -> CalculatorSnapshot {
    debug!("close_menus command");
    session.with_session_mut(|s| {
        s.close_menus();
        s.snapshot()
    })
}

/// Submits the form and waits for the estimate.
///
/// ## Errors
/// - `VALIDATION_ERROR` if the weight is rejected
/// - `ESTIMATE_IN_FLIGHT` if another estimate is computing
pub async fn submit_estimate(
    session: &SessionState,
    config: &ConfigState,
    emitter: &dyn EstimateEventEmitter,
) -> Result<EstimateView, ApiError> {
    debug!("submit_estimate command");

    let (submitted, snapshot) = session.with_session_mut(|s| (s.submit(), s.snapshot()));
    emitter.emit_snapshot(&snapshot);
    let request = submitted?;

    info!(
        request_id = %request.id,
        weight_kg = request.weight.kg(),
        package_type = %request.package_type,
        service_tier = %request.service_tier,
        "Estimate computing"
    );

    tokio::time::sleep(config.estimator.latency()).await;

    let (completed, snapshot) = session.with_session_mut(|s| (s.complete(&request.id), s.snapshot()));
    let result = completed?;
    emitter.emit_snapshot(&snapshot);

    info!(request_id = %request.id, cost = %result.cost, "Estimate settled");

    let view = EstimateView::new(result, &config.estimator);
    emitter.emit_estimate(&view);
    Ok(view)
}
