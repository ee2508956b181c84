//! # Console Front End
//!
//! A line-driven stand-in for the calculator page: each line is one page
//! event, each answer is the JSON the page would receive.
//!
//! ## Commands
//! ```text
//! show                       current form (get_calculator)
//! origin <text>              set_origin
//! destination <text>         set_destination        (alias: dest)
//! weight [text]              set_weight              (no text clears it)
//! package <box|envelope|pallet>
//! service <standard|express|same day>
//! menu <package|service>     toggle_menu
//! close                      close_menus
//! submit                     submit_estimate         (runs in background)
//! analyze <description>      analyze_description
//! config                     get_config
//! help
//! quit                                               (alias: exit)
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use parcego_core::{CalculatorSnapshot, SelectMenu};

use crate::commands::{self, EstimateView};
use crate::error::ApiError;
use crate::events::EstimateEventEmitter;
use crate::state::{AnalysisState, ConfigState, SessionState};

pub const HELP_TEXT: &str = "\
commands:
  show | origin <text> | destination <text> | weight [text]
  package <box|envelope|pallet> | service <standard|express|same day>
  menu <package|service> | close | submit | analyze <description>
  config | help | quit";

// =============================================================================
// Parsing
// =============================================================================

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Show,
    Origin(String),
    Destination(String),
    Weight(String),
    Package(String),
    Service(String),
    Menu(SelectMenu),
    Close,
    Submit,
    Analyze(String),
    Config,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ApiError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "show" => ConsoleCommand::Show,
            "origin" => ConsoleCommand::Origin(rest.to_string()),
            "destination" | "dest" => ConsoleCommand::Destination(rest.to_string()),
            "weight" => ConsoleCommand::Weight(rest.to_string()),
            "package" => ConsoleCommand::Package(required(verb, rest)?),
            "service" => ConsoleCommand::Service(required(verb, rest)?),
            "menu" => ConsoleCommand::Menu(parse_menu(rest)?),
            "close" => ConsoleCommand::Close,
            "submit" => ConsoleCommand::Submit,
            "analyze" => ConsoleCommand::Analyze(rest.to_string()),
            "config" => ConsoleCommand::Config,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn required(verb: &str, rest: &str) -> Result<String, ApiError> {
    if rest.is_empty() {
        Err(ApiError::validation(format!("'{}' needs a value", verb)))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_menu(rest: &str) -> Result<SelectMenu, ApiError> {
    match rest.to_lowercase().as_str() {
        "package" => Ok(SelectMenu::Package),
        "service" => Ok(SelectMenu::Service),
        _ => Err(ApiError::validation("menu must be 'package' or 'service'")),
    }
}

// =============================================================================
// Output
// =============================================================================

/// Prints the result card when an estimate settles.
pub struct ConsoleEmitter;

impl EstimateEventEmitter for ConsoleEmitter {
    fn emit_snapshot(&self, snapshot: &CalculatorSnapshot) {
        debug!(phase = ?snapshot.phase, label = %snapshot.submit_label, "Calculator updated");
    }

    fn emit_estimate(&self, estimate: &EstimateView) {
        println!("{}", render_card(estimate));
    }
}

/// Renders the result card as text.
pub fn render_card(estimate: &EstimateView) -> String {
    format!(
        "┌ {}\n│ {}\n│ {}\n│ {}\n└ {}",
        estimate.headline,
        estimate.cost_display,
        estimate.result.delivery_time,
        estimate.basis_line,
        estimate.taxes_note
    )
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to render response: {}", e),
    }
}

fn print_result<T: Serialize>(result: Result<T, ApiError>) {
    match result {
        Ok(value) => print_json(&value),
        Err(err) => print_json(&err),
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Everything a console session works with.
#[derive(Clone)]
pub struct Console {
    pub session: SessionState,
    pub config: ConfigState,
    pub analysis: AnalysisState,
    pub emitter: Arc<dyn EstimateEventEmitter>,
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Console {
    /// Runs one command, printing its response.
    ///
    /// `submit` is spawned so further lines are accepted while the estimate
    /// computes; the card is printed by the emitter when it settles.
    pub async fn execute(&self, command: ConsoleCommand) -> Flow {
        match command {
            ConsoleCommand::Show => print_json(&commands::get_calculator(&self.session)),
            ConsoleCommand::Origin(text) => print_json(&commands::set_origin(&self.session, text)),
            ConsoleCommand::Destination(text) => {
                print_json(&commands::set_destination(&self.session, text))
            }
            ConsoleCommand::Weight(text) => print_json(&commands::set_weight(&self.session, text)),
            ConsoleCommand::Package(name) => {
                print_result(commands::select_package(&self.session, &name))
            }
            ConsoleCommand::Service(name) => {
                print_result(commands::select_service(&self.session, &name))
            }
            ConsoleCommand::Menu(menu) => print_json(&commands::toggle_menu(&self.session, menu)),
            ConsoleCommand::Close => print_json(&commands::close_menus(&self.session)),
            ConsoleCommand::Submit => {
                let console = self.clone();
                tokio::spawn(async move {
                    if let Err(err) = commands::submit_estimate(
                        &console.session,
                        &console.config,
                        console.emitter.as_ref(),
                    )
                    .await
                    {
                        print_json(&err);
                    }
                });
            }
            ConsoleCommand::Analyze(description) => {
                match commands::analyze_description(&self.analysis, &description).await {
                    Some(analysis) => print_json(&analysis),
                    None => println!("(nothing to analyze)"),
                }
            }
            ConsoleCommand::Config => print_json(&commands::get_config(&self.config)),
            ConsoleCommand::Help => println!("{}", HELP_TEXT),
            ConsoleCommand::Quit => return Flow::Quit,
        }

        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ConsoleCommand {
        ConsoleCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse("show"), ConsoleCommand::Show);
        assert_eq!(parse("  SUBMIT "), ConsoleCommand::Submit);
        assert_eq!(parse("exit"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_keeps_argument_text() {
        assert_eq!(parse("weight 2.5kg"), ConsoleCommand::Weight("2.5kg".into()));
        assert_eq!(parse("weight"), ConsoleCommand::Weight(String::new()));
        assert_eq!(parse("service same day"), ConsoleCommand::Service("same day".into()));
        assert_eq!(parse("dest New York"), ConsoleCommand::Destination("New York".into()));
        assert_eq!(
            parse("analyze two mugs, gift wrapped"),
            ConsoleCommand::Analyze("two mugs, gift wrapped".into())
        );
    }

    #[test]
    fn test_parse_menus() {
        assert_eq!(parse("menu package"), ConsoleCommand::Menu(SelectMenu::Package));
        assert!(ConsoleCommand::parse("menu weight").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConsoleCommand::parse("package").is_err());
        assert!(ConsoleCommand::parse("teleport home").is_err());
    }

    #[tokio::test]
    async fn test_execute_updates_session() {
        let console = Console {
            session: SessionState::new(),
            config: ConfigState::default(),
            analysis: AnalysisState::unavailable(),
            emitter: Arc::new(crate::events::NoOpEmitter),
        };

        assert_eq!(console.execute(parse("weight 4")).await, Flow::Continue);
        assert_eq!(console.execute(parse("package pallet")).await, Flow::Continue);
        assert_eq!(console.execute(parse("quit")).await, Flow::Quit);

        let snapshot = commands::get_calculator(&console.session);
        assert_eq!(snapshot.weight_input, "4");
        assert_eq!(snapshot.package_type, parcego_core::PackageType::Pallet);
    }
}
