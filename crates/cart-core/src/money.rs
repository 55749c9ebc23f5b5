//! # Money Module
//!
//! Cent-rounded presentation of cart totals.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Parsing and summing stay in f64:                                       │
//! │    total == calc_total(items), bit for bit                              │
//! │                                                                         │
//! │  Rounding happens once, at the edge, for display:                       │
//! │    31.900000000000002  ──► Money(3190)  ──► "$31.90"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Money;
//!
//! let total = Money::from_amount(24.0);
//! assert_eq!(total.to_string(), "$24.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent, halves away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(18.9).cents(), 1890);
    /// assert_eq!(Money::from_amount(0.005).cents(), 1);
    /// assert_eq!(Money::from_amount(-5.5).cents(), -550);
    /// ```
    ///
    /// Non-finite amounts map to zero; out-of-range amounts saturate.
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money((amount * 100.0).round() as i64)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_from_amount_absorbs_float_noise() {
        // 9.00*2 + 13.90 accumulates representation error
        let noisy = 9.0 * 2.0 + 13.9;
        assert_eq!(Money::from_amount(noisy).cents(), 3190);
        assert_eq!(Money::from_amount(0.1 + 0.2).cents(), 30);
    }

    #[test]
    fn test_from_amount_non_finite() {
        assert_eq!(Money::from_amount(f64::NAN), Money::zero());
        assert_eq!(Money::from_amount(f64::INFINITY), Money::zero());
    }
}
