//! # Analysis State
//!
//! The description analyzer chosen at startup.
//!
//! ```text
//! analysis.enabled = false ──────────────────► UnavailableAnalyzer
//! analysis.enabled = true
//!     ├── GeminiAnalyzer::new() ok ──────────► GeminiAnalyzer
//!     └── no key / bad config ── warn! ──────► UnavailableAnalyzer
//! ```
//!
//! Either way the page gets an answer: an unavailable analyzer produces the
//! fallback handling advice.

use std::sync::Arc;

use parcego_analysis::{AnalysisConfig, GeminiAnalyzer, PackageAnalyzer, UnavailableAnalyzer};
use tracing::{info, warn};

use crate::config::AnalysisSettings;

/// Shared handle to the analyzer.
#[derive(Clone)]
pub struct AnalysisState {
    analyzer: Arc<dyn PackageAnalyzer>,
    available: bool,
}

impl AnalysisState {
    /// Wraps an existing analyzer.
    pub fn new(analyzer: Arc<dyn PackageAnalyzer>) -> Self {
        AnalysisState {
            analyzer,
            available: true,
        }
    }

    /// State whose analyzer always falls back.
    pub fn unavailable() -> Self {
        AnalysisState {
            analyzer: Arc::new(UnavailableAnalyzer),
            available: false,
        }
    }

    /// Builds the analyzer from settings plus the environment.
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        if !settings.enabled {
            info!("Package analysis disabled by configuration");
            return Self::unavailable();
        }

        let mut config = AnalysisConfig::from_env();
        if let Some(model) = &settings.model {
            config = config.with_model(model.clone());
        }

        match GeminiAnalyzer::new(config) {
            Ok(analyzer) => {
                info!(model = %analyzer.model(), "Package analysis enabled");
                Self::new(Arc::new(analyzer))
            }
            Err(e) => {
                warn!("Package analysis unavailable: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn analyzer(&self) -> &dyn PackageAnalyzer {
        self.analyzer.as_ref()
    }

    /// Whether a real analyzer is configured.
    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl std::fmt::Debug for AnalysisState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisState")
            .field("available", &self.available)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_settings_give_unavailable_state() {
        let settings = AnalysisSettings {
            enabled: false,
            model: None,
        };
        assert!(!AnalysisState::from_settings(&settings).is_available());
    }
}
