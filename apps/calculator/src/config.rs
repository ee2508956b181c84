//! # Calculator Configuration
//!
//! Settings for the calculator host, loaded once at startup.
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Defaults            latency 600 ms, "$", "Parcego", analysis on     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  2. calculator.toml     explicit path, or the platform config dir:     │
//! │         │                 Linux:   ~/.config/calculator/calculator.toml │
//! │         │                 macOS:   ~/Library/Application Support/       │
//! │         │                          com.parcego.calculator/              │
//! │         ▼                                                               │
//! │  3. Environment         PARCEGO_LATENCY_MS                              │
//! │         │               PARCEGO_CURRENCY_SYMBOL                         │
//! │         │               PARCEGO_ANALYSIS_ENABLED                        │
//! │         ▼                                                               │
//! │  4. validate()                                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! [estimator]
//! latency_ms = 600
//! currency_symbol = "$"
//! brand_name = "Parcego"
//!
//! [analysis]
//! enabled = true
//! model = "gemini-2.5-flash"
//! ```
//!
//! The analysis API key is deliberately absent: it only ever comes from the
//! environment (see `parcego_analysis::AnalysisConfig`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use parcego_core::DEFAULT_ESTIMATE_LATENCY_MS;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "calculator.toml";

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Settings Sections
// =============================================================================

/// `[estimator]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EstimatorSettings {
    /// Simulated delay between submit and result, in milliseconds.
    pub latency_ms: u64,

    /// Symbol placed before the cost on the result card.
    pub currency_symbol: String,

    /// Brand shown in the result card headline.
    pub brand_name: String,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        EstimatorSettings {
            latency_ms: DEFAULT_ESTIMATE_LATENCY_MS,
            currency_symbol: "$".to_string(),
            brand_name: "Parcego".to_string(),
        }
    }
}

impl EstimatorSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// `[analysis]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AnalysisSettings {
    /// Whether description analysis is offered at all.
    pub enabled: bool,

    /// Model override. `None` keeps the analysis crate's default.
    pub model: Option<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            enabled: true,
            model: None,
        }
    }
}

// =============================================================================
// Calculator Config
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub estimator: EstimatorSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,
}

impl CalculatorConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::from_file_if_exists(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load calculator config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file_if_exists(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading calculator config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.estimator.latency_ms == 0 {
            return Err(ConfigError::Invalid(
                "estimator.latency_ms must be greater than 0".into(),
            ));
        }

        if self.estimator.brand_name.trim().is_empty() {
            return Err(ConfigError::Invalid("estimator.brand_name must not be empty".into()));
        }

        if let Some(model) = &self.analysis.model {
            if model.trim().is_empty() {
                return Err(ConfigError::Invalid("analysis.model must not be empty".into()));
            }
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the process environment in
    /// production).
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(latency) = lookup("PARCEGO_LATENCY_MS") {
            match latency.parse::<u64>() {
                Ok(ms) => {
                    debug!(latency_ms = ms, "Overriding estimate latency from environment");
                    self.estimator.latency_ms = ms;
                }
                Err(_) => warn!(value = %latency, "Ignoring non-numeric PARCEGO_LATENCY_MS"),
            }
        }

        if let Some(symbol) = lookup("PARCEGO_CURRENCY_SYMBOL") {
            self.estimator.currency_symbol = symbol;
        }

        if let Some(enabled) = lookup("PARCEGO_ANALYSIS_ENABLED") {
            match enabled.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.analysis.enabled = true,
                "0" | "false" | "no" | "off" => self.analysis.enabled = false,
                _ => warn!(value = %enabled, "Unknown PARCEGO_ANALYSIS_ENABLED value"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "parcego", "calculator")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
