//! # Analysis Commands
//!
//! Optional helper for filling the form from a description.

use parcego_analysis::{analyze_package_description, PackageAnalysis};
use tracing::debug;

use crate::state::AnalysisState;

/// Analyses a free-text package description.
///
/// ## Returns
/// - `None` for a blank description (no request is made)
/// - the analysis, or the fallback advice if analysis failed
///
/// Never returns an error and never touches the calculator session.
pub async fn analyze_description(analysis: &AnalysisState, description: &str) -> Option<PackageAnalysis> {
    debug!(chars = description.len(), "analyze_description command");
    analyze_package_description(analysis.analyzer(), description).await
}
