//! # Application State
//!
//! Each command takes only the state it needs:
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │   SessionState   │ │   ConfigState    │ │   AnalysisState      │
//! │                  │ │                  │ │                      │
//! │  • Form inputs   │ │  • Latency       │ │  • Analyzer handle   │
//! │  • Selections    │ │  • Currency      │ │  • Availability      │
//! │  • Estimate      │ │  • Brand         │ │                      │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

mod analysis;
mod config;
mod session;

pub use analysis::AnalysisState;
pub use config::ConfigState;
pub use session::SessionState;
