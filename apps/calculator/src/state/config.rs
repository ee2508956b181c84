//! # Configuration State
//!
//! Read-only configuration shared by commands.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::ops::Deref;
use std::sync::Arc;

use crate::config::CalculatorConfig;

/// Shared, immutable calculator configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    config: Arc<CalculatorConfig>,
}

impl ConfigState {
    pub fn new(config: CalculatorConfig) -> Self {
        ConfigState {
            config: Arc::new(config),
        }
    }
}

impl Deref for ConfigState {
    type Target = CalculatorConfig;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
