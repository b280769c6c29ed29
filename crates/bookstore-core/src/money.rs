//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! Floating point cannot represent retail prices exactly (`0.1 + 0.2 !=
//! 0.3`), and the schema stores prices with two fixed decimal places.
//! We therefore keep every amount as an integer count of paise: ₹499.00
//! is `49900`. The database, the purchase flow and the report rows all
//! use paise; only the front ends format rupees for display.
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_paise(49900); // ₹499.00
//! let total = price * 3;                // ₹1497.00
//! assert_eq!(total.paise(), 149700);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (hundredths of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: keeps subtraction total; amounts in this system
///   are never negative in storage (CHECK constraints), but arithmetic
///   stays closed.
/// - **Single-field tuple struct**: zero-cost abstraction over i64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_paise(49900); // ₹499.00
    /// assert_eq!(price.paise(), 49900);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees and a paise part.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_rupees_paise(499, 0);
    /// assert_eq!(price.paise(), 49900);
    /// ```
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a purchased quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(49900); // ₹499.00
    /// let total = unit_price.multiply_quantity(3);
    /// assert_eq!(total.paise(), 149700); // ₹1497.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Error returned when a money string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid money amount '{0}': expected e.g. 499 or 499.00")]
pub struct ParseMoneyError(pub String);

/// Parses amounts as typed at a prompt or form: `"499"`, `"499.5"`,
/// `"499.00"`. At most two decimal places; no exponent, no sign suffix.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseMoneyError(s.to_string());

        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if frac.len() > 2 {
            return Err(err());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| err())?
        };
        // "499.5" means 50 paise, not 5
        let paise: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| err())? * 10,
            _ => frac.parse().map_err(|_| err())?,
        };

        // apply the sign to the combined amount so "-0.50" stays negative
        Ok(Money::from_paise(sign * (rupees * 100 + paise)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable rupee format, e.g. `₹499.00`. For console output and
/// web pages; storage always uses raw paise.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(49900);
        assert_eq!(money.paise(), 49900);
        assert_eq!(money.rupees(), 499);
        assert_eq!(money.paise_part(), 0);
    }

    #[test]
    fn test_from_rupees_paise() {
        assert_eq!(Money::from_rupees_paise(499, 0).paise(), 49900);
        assert_eq!(Money::from_rupees_paise(3, 75).paise(), 375);
        assert_eq!(Money::from_rupees_paise(-5, 50).paise(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(49900)), "₹499.00");
        assert_eq!(format!("{}", Money::from_paise(375)), "₹3.75");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
    }

    #[test]
    fn test_multiply_quantity_matches_purchase_total() {
        // Book 101: ₹499.00, quantity 3 => ₹1497.00
        let unit = Money::from_paise(49900);
        assert_eq!(unit.multiply_quantity(3).paise(), 149700);
    }

    #[test]
    fn test_parse_whole_rupees() {
        assert_eq!("499".parse::<Money>().unwrap().paise(), 49900);
        assert_eq!("0".parse::<Money>().unwrap().paise(), 0);
    }

    #[test]
    fn test_parse_with_decimals() {
        assert_eq!("499.00".parse::<Money>().unwrap().paise(), 49900);
        assert_eq!("499.5".parse::<Money>().unwrap().paise(), 49950);
        assert_eq!("3.75".parse::<Money>().unwrap().paise(), 375);
        assert_eq!(".50".parse::<Money>().unwrap().paise(), 50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("4.999".parse::<Money>().is_err());
        assert!("4,99".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_negative_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_paise(100).is_negative());
        assert!(Money::from_paise(-100).is_negative());
    }
}
