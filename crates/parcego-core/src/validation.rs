//! # Validation Module
//!
//! Weight input validation for the calculator form.
//!
//! ## Two Checks, One Predicate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  keystroke ──► soft_weight_message()  ──┐                               │
//! │                  "" → no message        │                               │
//! │                                         ├──► parse_weight_number()      │
//! │  submit    ──► validate_weight()      ──┘         │                     │
//! │                  "" → rejected                    ▼                     │
//! │                                            Weight::is_acceptable()      │
//! │                                            finite && ≥ 0.1              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both checks reach the same verdict on every non-empty string. The only
//! difference is the empty field: while typing it shows no message, at
//! submit time it is rejected.
//!
//! ## Number Parsing
//! Weight text is read the way a lenient number field reads it: leading
//! whitespace is skipped and the longest numeric prefix is used, so
//! `"2.5kg"` means 2.5 and `"abc"` means nothing.

use crate::error::ValidationError;
use crate::types::Weight;
use crate::MIN_WEIGHT_KG;

/// Inline message shown under the weight field while typing.
pub const SOFT_WEIGHT_MESSAGE: &str = "Min 0.1 kg";

/// Message shown when a submission is rejected for its weight.
pub const SUBMIT_WEIGHT_MESSAGE: &str = "Please enter a valid weight (min 0.1 kg)";

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Number Parsing
// =============================================================================

/// Parses the longest numeric prefix of `raw`.
///
/// ## Accepted Forms
/// ```text
/// "2.5"      → 2.5         "  7"     → 7.0
/// "2.5kg"    → 2.5         ".5"      → 0.5
/// "5."       → 5.0         "1e3"     → 1000.0
/// "-3"       → -3.0        "1e"      → 1.0 (dangling exponent ignored)
/// "Infinity" → ∞           "abc"     → None
/// ""         → None        "."       → None
/// ```
///
/// Range is not checked here; see [`validate_weight`].
pub fn parse_weight_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes.get(exp_end..).unwrap_or_default());
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// =============================================================================
// Weight Validation
// =============================================================================

/// Validates weight text at submission time.
///
/// ## Rules
/// - Must contain a numeric prefix (see [`parse_weight_number`])
/// - Must be finite
/// - Must be at least 0.1 kg
/// - No upper bound, no rounding
///
/// ## Example
/// ```rust
/// use parcego_core::validation::validate_weight;
///
/// assert_eq!(validate_weight("2.5").unwrap().kg(), 2.5);
/// assert_eq!(validate_weight("0.1").unwrap().kg(), 0.1);
/// assert!(validate_weight("").is_err());
/// assert!(validate_weight("0.05").is_err());
/// ```
pub fn validate_weight(raw: &str) -> ValidationResult<Weight> {
    parse_weight_number(raw)
        .and_then(|kg| Weight::try_from_kg(kg).ok())
        .ok_or_else(|| ValidationError::InvalidWeight {
            raw: raw.to_string(),
            min: MIN_WEIGHT_KG,
        })
}

/// Returns the inline message to show under the weight field, if any.
///
/// An empty field shows nothing; anything else shows
/// [`SOFT_WEIGHT_MESSAGE`] exactly when [`validate_weight`] would reject it.
///
/// ## Example
/// ```rust
/// use parcego_core::validation::soft_weight_message;
///
/// assert_eq!(soft_weight_message(""), None);
/// assert_eq!(soft_weight_message("3"), None);
/// assert_eq!(soft_weight_message("0"), Some("Min 0.1 kg"));
/// ```
pub fn soft_weight_message(raw: &str) -> Option<&'static str> {
    if raw.is_empty() || validate_weight(raw).is_ok() {
        None
    } else {
        Some(SOFT_WEIGHT_MESSAGE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_weight_number("2.5"), Some(2.5));
        assert_eq!(parse_weight_number("10"), Some(10.0));
        assert_eq!(parse_weight_number("  7"), Some(7.0));
        assert_eq!(parse_weight_number("-3"), Some(-3.0));
        assert_eq!(parse_weight_number("+4"), Some(4.0));
    }

    #[test]
    fn test_parse_takes_numeric_prefix() {
        assert_eq!(parse_weight_number("2.5kg"), Some(2.5));
        assert_eq!(parse_weight_number("3 kg"), Some(3.0));
        assert_eq!(parse_weight_number("1.2.3"), Some(1.2));
        assert_eq!(parse_weight_number(".5"), Some(0.5));
        assert_eq!(parse_weight_number("5."), Some(5.0));
    }

    #[test]
    fn test_parse_exponents() {
        assert_eq!(parse_weight_number("1e3"), Some(1000.0));
        assert_eq!(parse_weight_number("2.5E-1"), Some(0.25));
        assert_eq!(parse_weight_number("1e"), Some(1.0));
        assert_eq!(parse_weight_number("1e+"), Some(1.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_weight_number(""), None);
        assert_eq!(parse_weight_number("   "), None);
        assert_eq!(parse_weight_number("abc"), None);
        assert_eq!(parse_weight_number("."), None);
        assert_eq!(parse_weight_number("-"), None);
        assert_eq!(parse_weight_number("kg2"), None);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_weight_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_weight_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_validate_weight_accepts() {
        assert_eq!(validate_weight("0.1").unwrap().kg(), 0.1);
        assert_eq!(validate_weight("2.345").unwrap().kg(), 2.345);
        assert_eq!(validate_weight("2.5kg").unwrap().kg(), 2.5);
        assert_eq!(validate_weight("100000").unwrap().kg(), 100_000.0);
    }

    #[test]
    fn test_validate_weight_rejects() {
        for raw in ["", "abc", "0", "0.05", "-5", "0.0999", "Infinity", "1e400"] {
            let err = validate_weight(raw).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidWeight {
                    raw: raw.to_string(),
                    min: MIN_WEIGHT_KG,
                },
                "expected rejection of {raw:?}"
            );
        }
    }

    #[test]
    fn test_soft_message() {
        assert_eq!(soft_weight_message(""), None);
        assert_eq!(soft_weight_message("2"), None);
        assert_eq!(soft_weight_message("0.1"), None);
        assert_eq!(soft_weight_message("0.05"), Some(SOFT_WEIGHT_MESSAGE));
        assert_eq!(soft_weight_message("abc"), Some(SOFT_WEIGHT_MESSAGE));
        assert_eq!(soft_weight_message(" "), Some(SOFT_WEIGHT_MESSAGE));
    }

    #[test]
    fn test_soft_and_submit_checks_agree_on_non_empty_input() {
        let samples = [
            "0", "0.1", "0.09", "1", "2.5kg", "abc", " ", ".", ".5", "-1", "1e3", "1e-3", "Infinity",
            "5.01", "  3", "x1",
        ];
        for raw in samples {
            let soft_shows = soft_weight_message(raw).is_some();
            let submit_rejects = validate_weight(raw).is_err();
            assert_eq!(soft_shows, submit_rejects, "checks disagree on {raw:?}");
        }
    }
}
