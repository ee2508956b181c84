//! # Package Analyzer
//!
//! The seam between the calculator host and whatever service reads package
//! descriptions.
//!
//! ## Flow
//! ```text
//! description ──► analyze_package_description()
//!                    │
//!                    ├── blank ──────────────────────► None (no call made)
//!                    │
//!                    ▼
//!                 analyzer.analyze()
//!                    │
//!                    ├── Ok(Some(analysis)) ─────────► Some(analysis)
//!                    ├── Ok(None) (empty answer) ────► None
//!                    └── Err(_) ── error! log ──────► Some(fallback advice)
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{AnalysisError, AnalysisResult};

/// Advice returned when analysis fails for any reason.
pub const FALLBACK_HANDLING_ADVICE: &str = "Could not analyze. Please enter details manually.";

/// Suggestions derived from a package description.
///
/// Every field is optional; the model may leave any of them out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageAnalysis {
    /// e.g. "2kg"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_estimate: Option<String>,

    /// e.g. "30x20x10cm"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_estimate: Option<String>,

    /// e.g. "Electronics"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// e.g. "Fragile, keep dry"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handling_advice: Option<String>,
}

impl PackageAnalysis {
    /// The result shown when analysis is unavailable: advice only.
    pub fn fallback() -> Self {
        PackageAnalysis {
            handling_advice: Some(FALLBACK_HANDLING_ADVICE.to_string()),
            ..Self::default()
        }
    }
}

/// Something that can read a package description.
#[async_trait]
pub trait PackageAnalyzer: Send + Sync {
    /// Analyses `description`.
    ///
    /// `Ok(None)` means the service answered but had nothing to say.
    async fn analyze(&self, description: &str) -> AnalysisResult<Option<PackageAnalysis>>;
}

/// Analyzer used when analysis is switched off or not configured.
///
/// Always fails, so callers get the fallback advice.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAnalyzer;

#[async_trait]
impl PackageAnalyzer for UnavailableAnalyzer {
    async fn analyze(&self, _description: &str) -> AnalysisResult<Option<PackageAnalysis>> {
        Err(AnalysisError::Disabled)
    }
}

/// Analyses a description, never failing.
///
/// Blank input returns `None` without touching the analyzer. Any analyzer
/// error is logged and replaced with [`PackageAnalysis::fallback`].
pub async fn analyze_package_description<A>(analyzer: &A, description: &str) -> Option<PackageAnalysis>
where
    A: PackageAnalyzer + ?Sized,
{
    if description.trim().is_empty() {
        debug!("Blank package description, skipping analysis");
        return None;
    }

    match analyzer.analyze(description).await {
        Ok(analysis) => analysis,
        Err(e) => {
            error!(error = %e, "Package description analysis failed");
            Some(PackageAnalysis::fallback())
        }
    }
}
