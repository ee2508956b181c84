//! # Config Commands
//!
//! Commands for retrieving calculator configuration.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::state::ConfigState;

/// Gets the current calculator configuration.
///
/// ## When Used
/// - App startup (currency symbol, brand name)
/// - Deciding whether to show the description helper
pub fn get_config(config: &ConfigState) -> CalculatorConfig {
    debug!("get_config command");
    (**config).clone()
}
