//! # Estimate Events
//!
//! Push notifications from commands to whatever renders the calculator.
//!
//! ```text
//! submit_estimate()
//!      │
//!      ├── emit_snapshot()   phase = computing, button "Calculating..."
//!      │
//!      │   ... latency ...
//!      │
//!      ├── emit_snapshot()   phase = settled
//!      └── emit_estimate()   the result card
//! ```

use parcego_core::CalculatorSnapshot;

use crate::commands::estimate::EstimateView;

/// Receives calculator updates.
pub trait EstimateEventEmitter: Send + Sync {
    /// The form changed (phase, label, visible result).
    fn emit_snapshot(&self, snapshot: &CalculatorSnapshot);

    /// An estimate settled.
    fn emit_estimate(&self, estimate: &EstimateView);
}

/// No-op event emitter for testing.
pub struct NoOpEmitter;

impl EstimateEventEmitter for NoOpEmitter {
    fn emit_snapshot(&self, _snapshot: &CalculatorSnapshot) {}
    fn emit_estimate(&self, _estimate: &EstimateView) {}
}
