//! # Parcego Calculator Library
//!
//! Host application for the Parcego rate calculator: configuration,
//! logging, state, and the commands the calculator page calls.
//!
//! ## Module Organization
//! ```text
//! parcego_calculator/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── calculator.toml + environment
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Calculator form (Arc<Mutex>)
//! │   ├── config.rs   ◄─── Read-only configuration
//! │   └── analysis.rs ◄─── Description analyzer handle
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── estimate.rs ◄─── Form, selections, submit
//! │   ├── analysis.rs ◄─── Description analysis
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── events.rs       ◄─── Event emitter trait
//! ├── console.rs      ◄─── Line-driven front end
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod events;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CalculatorConfig;
use console::{Console, ConsoleCommand, ConsoleEmitter, Flow, HELP_TEXT};
use state::{AnalysisState, ConfigState, SessionState};

/// Runs the calculator until stdin closes or `quit` is entered.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO (parcego crates at DEBUG), RUST_LOG overrides       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • PARCEGO_CONFIG path, or the platform config dir                   │
/// │     • Falls back to defaults on any error                               │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: empty form, Box / Standard                          │
/// │     • ConfigState: loaded configuration                                 │
/// │     • AnalysisState: Gemini analyzer, or unavailable                    │
/// │                                                                         │
/// │  4. Read Commands ────────────────────────────────────────────────────► │
/// │     • One line per page event until quit / EOF                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    info!("Starting Parcego Rate Calculator");

    let config_path = std::env::var("PARCEGO_CONFIG").ok().map(PathBuf::from);
    let config = CalculatorConfig::load_or_default(config_path);
    info!(
        latency_ms = config.estimator.latency_ms,
        analysis_enabled = config.analysis.enabled,
        "Configuration loaded"
    );

    let console = Console {
        session: SessionState::new(),
        analysis: AnalysisState::from_settings(&config.analysis),
        config: ConfigState::new(config),
        emitter: Arc::new(ConsoleEmitter),
    };

    info!("State initialized");
    println!("{}", HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ConsoleCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        if console.execute(command).await == Flow::Quit {
            break;
        }
    }

    info!("Calculator stopped");
    Ok(())
}

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,parcego=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=parcego=trace` - Show trace for parcego crates only
/// - Default: INFO, with DEBUG for parcego crates
///
/// Logs go to stderr so stdout stays the command output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn with_filter(directives: &str, check: impl FnOnce()) {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, check);
    }

    #[test]
    fn test_default_filter_keeps_dependencies_at_info() {
        with_filter(DEFAULT_LOG_FILTER, || {
            assert!(tracing::enabled!(target: "parcego_calculator", Level::DEBUG));
            assert!(tracing::enabled!(target: "parcego_analysis::gemini", Level::DEBUG));
            assert!(!tracing::enabled!(target: "parcego_core", Level::TRACE));

            assert!(tracing::enabled!(target: "hyper::proto", Level::INFO));
            assert!(!tracing::enabled!(target: "hyper::proto", Level::DEBUG));
            assert!(!tracing::enabled!(target: "reqwest::connect", Level::TRACE));
        });
    }

    #[test]
    fn test_explicit_filter_is_honoured() {
        with_filter("warn", || {
            assert!(tracing::enabled!(target: "parcego_calculator", Level::WARN));
            assert!(!tracing::enabled!(target: "parcego_calculator", Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper::proto", Level::TRACE));
        });
    }
}
