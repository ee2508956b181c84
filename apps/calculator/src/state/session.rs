//! # Session State
//!
//! Holds the calculator form for the running app.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Commands run concurrently (typing while an estimate computes)
//! 2. Only one command should modify the form at a time
//! 3. The estimate task outlives the command that started it
//!
//! The lock is never held across an `.await`: `submit_estimate` locks to
//! submit, releases, sleeps, then locks again to complete.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page Action              Command                 Session Change        │
//! │  ───────────              ───────                 ──────────────        │
//! │  Type weight ───────────► set_weight() ─────────► weight + message     │
//! │  Pick service ──────────► select_service() ─────► tier, menu closed    │
//! │  Get Estimate ──────────► submit_estimate() ────► Computing            │
//! │                                 │ latency                               │
//! │                                 └───────────────► Settled              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use parcego_core::CalculatorSession;

/// Thread-safe session state wrapper.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<CalculatorSession>>,
}

impl SessionState {
    /// Creates state around a fresh, empty form.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(CalculatorSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = session_state.with_session(|s| s.snapshot());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalculatorSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.set_weight_input("2.5"));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CalculatorSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_session() {
        let state = SessionState::new();
        let other = state.clone();

        state.with_session_mut(|s| s.set_weight_input("2.5"));
        assert_eq!(other.with_session(|s| s.weight_input().to_string()), "2.5");
    }

    #[test]
    fn test_results_pass_through() {
        let state = SessionState::new();
        let submitted = state.with_session_mut(|s| s.submit());
        assert!(submitted.is_err());
        assert!(!state.with_session(|s| s.is_computing()));
    }
}
