//! # parcego-analysis: Package Description Analysis
//!
//! Optional helper that reads a free-text package description and suggests
//! weight, dimensions, category and handling advice.
//!
//! ## Modules
//!
//! - [`analyzer`] - `PackageAnalyzer` trait, result type, never-failing entry point
//! - [`gemini`] - HTTP implementation against the Gemini API
//! - [`config`] - Endpoint, model and key settings
//! - [`error`] - Analysis error types
//!
//! ## Example
//! ```rust,no_run
//! use parcego_analysis::{analyze_package_description, AnalysisConfig, GeminiAnalyzer};
//!
//! # async fn demo() -> Result<(), parcego_analysis::AnalysisError> {
//! let analyzer = GeminiAnalyzer::new(AnalysisConfig::from_env())?;
//! if let Some(analysis) = analyze_package_description(&analyzer, "two ceramic mugs").await {
//!     println!("{:?}", analysis.handling_advice);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gemini;

pub use analyzer::{
    analyze_package_description, PackageAnalysis, PackageAnalyzer, UnavailableAnalyzer,
    FALLBACK_HANDLING_ADVICE,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use gemini::GeminiAnalyzer;
