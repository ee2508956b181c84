//! # Money Module
//!
//! Provides the `Money` type for estimated shipping costs.
//!
//! ## Rounded Once, Never Truncated
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  (10 + 16.5) × 2.8 in binary floating point:                           │
//! │    74.19999999999999  ❌ NOT what the customer should see               │
//! │                                                                         │
//! │  OUR SOLUTION: Round to cents exactly once                              │
//! │    pricing math (f64) ──► from_major_rounded() ──► 74.20                │
//! │                                                                         │
//! │  Weights have no upper bound, so the amount stays an f64: an integer    │
//! │  cent count would saturate long before f64 runs out of range.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parcego_core::money::Money;
//!
//! let cost = Money::from_major_rounded(11.0);
//! assert_eq!(cost.to_string(), "$11.00");
//! assert_eq!(cost.amount_string(), "11.00");
//!
//! // The single float → money conversion point
//! let total = Money::from_major_rounded(74.19999999999999);
//! assert_eq!(total.amount_string(), "74.20");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Above this many cents every f64 is already a whole number of cents.
const WHOLE_CENTS_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Rendered for totals past the f64 range.
pub const NON_FINITE_AMOUNT: &str = "Infinity";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major units (dollars), rounded to whole cents.
///
/// ## Design Decisions
/// - **f64 amount**: Covers every price an unbounded weight can produce;
///   `(amount × 100)` is integral after construction
/// - **Single field tuple struct**: Zero-cost abstraction over f64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  compute_cost() ──► EstimateResult.cost ──► "$196.00" on the result    │
/// │                                              card                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Converts a floating point amount in major units (dollars) to Money,
    /// rounding to the nearest cent with halves rounded away from zero.
    ///
    /// ## Rounding
    /// This is the ONLY place a float becomes money. Pricing does all of its
    /// multiplication in `f64` and rounds exactly once, here:
    /// ```text
    ///   10.2 × 100 = 1019.9999999999999  ──round──►  10.20
    ///   18.549999999999997 × 100         ──round──►  18.55
    ///   0.125 × 100 = 12.5               ──round──►   0.13 (half-up)
    ///   1.568e18                         ──────────►  unchanged (no fraction)
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use parcego_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_rounded(10.2).amount_string(), "10.20");
    /// assert_eq!(Money::from_major_rounded(0.125).amount_string(), "0.13");
    /// ```
    pub fn from_major_rounded(amount: f64) -> Self {
        let scaled = amount * 100.0;
        // Also catches non-finite input.
        if !(scaled.abs() < WHOLE_CENTS_LIMIT) {
            return Money(amount);
        }
        Money(scaled.round() / 100.0)
    }

    /// Returns the amount in major units.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// False once a total has overflowed the f64 range.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Formats the amount with exactly two decimals and no currency symbol.
    ///
    /// This is the string the estimate card renders after its own symbol,
    /// and the form pinned by the pricing tests. Amounts past the f64 range
    /// render as [`NON_FINITE_AMOUNT`].
    ///
    /// ## Example
    /// ```rust
    /// use parcego_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_rounded(10.2).amount_string(), "10.20");
    /// assert_eq!(Money::from_major_rounded(-5.5).amount_string(), "-5.50");
    /// ```
    pub fn amount_string(&self) -> String {
        if self.0 < 0.0 {
            format!("-{}", abs_amount_string(self.0))
        } else {
            abs_amount_string(self.0)
        }
    }

    /// Formats the amount with a caller-supplied currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use parcego_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_rounded(196.0).format_with("€"), "€196.00");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        if self.0 < 0.0 {
            format!("-{}{}", symbol, abs_amount_string(self.0))
        } else {
            format!("{}{}", symbol, abs_amount_string(self.0))
        }
    }
}

fn abs_amount_string(amount: f64) -> String {
    let amount = amount.abs();
    if amount.is_finite() {
        format!("{:.2}", amount)
    } else {
        NON_FINITE_AMOUNT.to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in dollars (`$11.00`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(amount: f64) -> String {
        Money::from_major_rounded(amount).amount_string()
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major_rounded(10.99)), "$10.99");
        assert_eq!(format!("{}", Money::from_major_rounded(5.0)), "$5.00");
        assert_eq!(format!("{}", Money::from_major_rounded(-5.5)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_amount_string_keeps_two_decimals() {
        assert_eq!(rounded(11.0), "11.00");
        assert_eq!(rounded(0.05), "0.05");
        assert_eq!(rounded(196.0), "196.00");
    }

    #[test]
    fn test_from_major_rounded_absorbs_float_noise() {
        // 26.5 × 2.8 is not exactly 74.2 in binary floating point
        assert_eq!(rounded(26.5 * 2.8), "74.20");
        assert_eq!(rounded(26.5 * 0.7), "18.55");
        assert_eq!(rounded(10.0 + 0.1 * 2.0), "10.20");
        assert_eq!(rounded(10.0 + 5.01 * 8.0), "50.08");
    }

    #[test]
    fn test_from_major_rounded_halves_round_up() {
        // 0.125 is exact in binary, so ×100 is a true tie
        assert_eq!(rounded(0.125), "0.13");
        assert_eq!(rounded(0.025), "0.03");
    }

    #[test]
    fn test_large_amounts_are_kept_whole() {
        // Well past i64::MAX cents
        let amount = 1.568e18;
        let money = Money::from_major_rounded(amount);
        assert_eq!(money.amount(), amount);
        assert_eq!(money.amount_string(), "1568000000000000000.00");

        let huge = 7.84e301;
        assert_eq!(Money::from_major_rounded(huge).amount(), huge);
        assert!(Money::from_major_rounded(huge).is_finite());
    }

    #[test]
    fn test_non_finite_amount_renders_as_infinity() {
        let money = Money::from_major_rounded(f64::INFINITY);
        assert!(!money.is_finite());
        assert_eq!(money.amount_string(), NON_FINITE_AMOUNT);
        assert_eq!(money.format_with("$"), "$Infinity");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
        assert_eq!(Money::zero().amount(), 0.0);
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major_rounded(12.34).format_with("CA$"), "CA$12.34");
        assert_eq!(Money::from_major_rounded(-12.34).format_with("€"), "-€12.34");
    }
}
