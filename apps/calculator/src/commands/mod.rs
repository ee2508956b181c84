//! # Commands Module
//!
//! Everything the calculator page can ask the host to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── estimate.rs  ◄─── Form input, selections, submit
//! ├── analysis.rs  ◄─── Description analysis helper
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn set_weight(session: &SessionState, weight: String)
//!
//! // Needs session, config and an event sink
//! async fn submit_estimate(session: &SessionState, config: &ConfigState, emitter: &dyn EstimateEventEmitter)
//!
//! // Only needs the analyzer
//! async fn analyze_description(analysis: &AnalysisState, description: &str)
//! ```

pub mod analysis;
pub mod config;
pub mod estimate;

pub use analysis::analyze_description;
pub use config::get_config;
pub use estimate::{
    close_menus, get_calculator, select_package, select_service, set_destination, set_origin,
    set_weight, submit_estimate, toggle_menu, EstimateView,
};
