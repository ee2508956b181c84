//! # Analysis Configuration
//!
//! Settings for the generative-text endpoint.
//!
//! ## Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Environment variables
//!
//! | Variable                    | Field       |
//! |-----------------------------|-------------|
//! | `PARCEGO_API_KEY`           | `api_key`   |
//! | `API_KEY` (legacy name)     | `api_key`   |
//! | `PARCEGO_ANALYSIS_MODEL`    | `model`     |
//! | `PARCEGO_ANALYSIS_BASE_URL` | `base_url`  |

use std::fmt;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::{AnalysisError, AnalysisResult};

/// Default model for description analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Connection settings for [`crate::GeminiAnalyzer`].
#[derive(Clone)]
pub struct AnalysisConfig {
    /// API key. Required to build an analyzer.
    pub api_key: Option<String>,

    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,

    /// Scheme and host, without a trailing path.
    pub base_url: String,

    /// API version path segment.
    pub api_version: String,

    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl AnalysisConfig {
    /// Creates a config with the given key and default everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        AnalysisConfig {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Sets the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API host (useful for pointing at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Loads defaults, then applies process environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads defaults, then applies overrides from `lookup`.
    ///
    /// `lookup` maps a variable name to its value; empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get("PARCEGO_API_KEY").or_else(|| get("API_KEY")) {
            config.api_key = Some(key);
        }

        if let Some(model) = get("PARCEGO_ANALYSIS_MODEL") {
            debug!(model = %model, "Overriding analysis model from environment");
            config.model = model;
        }

        if let Some(base_url) = get("PARCEGO_ANALYSIS_BASE_URL") {
            debug!(base_url = %base_url, "Overriding analysis base URL from environment");
            config.base_url = base_url;
        }

        config
    }

    /// Validates the configuration.
    ///
    /// A missing API key is not checked here; the analyzer reports it
    /// when it is built.
    pub fn validate(&self) -> AnalysisResult<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AnalysisError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig("model must not be empty".into()));
        }

        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(AnalysisError::InvalidConfig(
                "timeouts must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Full URL of the structured-generation endpoint (without the key).
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            ("PARCEGO_API_KEY", "primary"),
            ("API_KEY", "legacy"),
            ("PARCEGO_ANALYSIS_MODEL", "gemini-2.5-pro"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_legacy_key_and_empty_values() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            ("PARCEGO_API_KEY", "  "),
            ("API_KEY", "legacy"),
            ("PARCEGO_ANALYSIS_MODEL", ""),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = AnalysisConfig::new("k").with_base_url("not a url");
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))));

        let config = AnalysisConfig::new("k").with_base_url("ftp://example.com");
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let config = AnalysisConfig::new("k").with_model(" ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint() {
        let config = AnalysisConfig::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", AnalysisConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
