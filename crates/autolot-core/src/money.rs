//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  An invoice total that is off by a cent is a support ticket.        │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    $20,000.00 is 2_000_000 cents; 19% tax is exact integer math     │
//! │    with one explicit rounding step, applied once per invoice.       │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use autolot_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(4500); // $45.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // $90.00
//! let total = price + Money::from_cents(1500);  // $60.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refunds/adjustments even though the
///   catalog only carries non-negative prices
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for the presentation boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The stores, calculations, and reports all use cents. Only display
    /// code converts to a decimal string.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use autolot_core::money::Money;
    ///
    /// let price = Money::from_major_minor(45, 99); // $45.99
    /// assert_eq!(price.cents(), 4599);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a rate with half-up rounding at the cent.
    ///
    /// ## Rounding Contract
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────┐
    /// │  HALF-UP AT TWO DECIMALS, APPLIED EXACTLY ONCE                  │
    /// │                                                                 │
    /// │  tax   = round(subtotal × rate)   ← the single rounding step    │
    /// │  total = subtotal + tax           ← already exact, no rounding  │
    /// │                                                                 │
    /// │  Rounding never happens per line item. Line totals are exact    │
    /// │  integer products, so Σ(line totals) is exact by construction.  │
    /// └─────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Integer math: `(cents * bps + 5000) / 10000`. The `+5000` term is
    /// the half-up adjustment (5000/10000 = 0.5). i128 intermediate keeps
    /// large subtotals from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use autolot_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(2_000_000); // $20,000.00
    /// let tax = subtotal.apply_rate(TaxRate::from_bps(1900));
    /// assert_eq!(tax.cents(), 380_000); // $3,800.00
    /// ```
    pub fn apply_rate(&self, rate: TaxRate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use autolot_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4500); // $45.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 13500); // $135.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for receipts and debugging; localization is a presentation
/// concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Default money is zero.
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1900 bps = 19.00% (the fixed statutory rate, see [`crate::TAX_RATE_BPS`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(4599);
        assert_eq!(money.cents(), 4599);
        assert_eq!(money.units(), 45);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(45, 99);
        assert_eq!(money.cents(), 4599);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4599)), "$45.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 399]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 749);
    }

    #[test]
    fn test_nineteen_percent_exact() {
        // $20,000.00 at 19% = $3,800.00, no rounding needed
        let subtotal = Money::from_cents(2_000_000);
        let tax = subtotal.apply_rate(TaxRate::from_bps(1900));
        assert_eq!(tax.cents(), 380_000);
    }

    #[test]
    fn test_nineteen_percent_rounds_half_up() {
        // $0.45 at 19% = 8.55 cents → rounds up to 9 cents
        let subtotal = Money::from_cents(45);
        let tax = subtotal.apply_rate(TaxRate::from_bps(1900));
        assert_eq!(tax.cents(), 9);

        // $0.13 at 19% = 2.47 cents → rounds down to 2 cents
        let subtotal = Money::from_cents(13);
        let tax = subtotal.apply_rate(TaxRate::from_bps(1900));
        assert_eq!(tax.cents(), 2);
    }

    #[test]
    fn test_zero_subtotal_zero_tax() {
        let tax = Money::zero().apply_rate(TaxRate::from_bps(1900));
        assert!(tax.is_zero());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(1500);
        assert_eq!(unit_price.multiply_quantity(4).cents(), 6000);
    }

    #[test]
    fn test_tax_rate_percentage() {
        let rate = TaxRate::from_bps(1900);
        assert!((rate.percentage() - 19.0).abs() < 0.001);
    }
}
