//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  In floating point:  0.1 + 0.2 = 0.30000000000000004                │
//! │                                                                     │
//! │  OUR SOLUTION: integer cents                                        │
//! │    $10.99  →  Money(1099)                                           │
//! │    Ledger sums stay exact; rounding happens once, at the boundary   │
//! │    of a rate computation (tax, currency conversion), never inside   │
//! │    intermediate sums.                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same type carries both currencies: a `Money` is cents of whichever
//! currency the surrounding field says it is (`*_cents` = USD,
//! `*_b_cents` = Bs). Display is symbol-free for that reason.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::{ExchangeRate, TaxRate};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are legal; oversold stock values
///   negative, and the reconciliation engine never floors
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the tax amount for this value.
    ///
    /// Integer math with rounding at the boundary:
    /// `amount_cents × bps / 10000`, half away from zero, through i128 so
    /// large ledgers cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    /// use bodega_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(10_000); // 100.00
    /// let rate = TaxRate::from_bps(3000);       // 30.00%
    /// assert_eq!(subtotal.tax(rate).cents(), 3_000); // 30.00
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        Money::from_cents(scale_round(self.0, rate.bps() as i64))
    }

    /// Converts this USD value to Bs at the given exchange rate.
    ///
    /// Same boundary-rounding formula as [`Money::tax`]: the rate is a
    /// fixed-point ten-thousandths value, so
    /// `usd_cents × scaled / 10000`, rounded half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    /// use bodega_core::types::ExchangeRate;
    ///
    /// let total = Money::from_cents(13_000);          // 130.00 USD
    /// let rate = ExchangeRate::from_scaled(355_000);  // 35.5000 Bs/USD
    /// assert_eq!(total.to_b(rate).cents(), 461_500);  // Bs 4615.00
    /// ```
    pub fn to_b(&self, rate: ExchangeRate) -> Money {
        Money::from_cents(scale_round(self.0, rate.scaled()))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250);
    /// assert_eq!(unit_price.times(10).cents(), 2500);
    /// ```
    #[inline]
    pub const fn times(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// `cents × factor / 10000`, rounded half away from zero.
///
/// i128 intermediate so whole-ledger aggregates cannot overflow; the ±5000
/// offset keeps exact multiples exact on both sides of zero (oversold stock
/// values negative).
fn scale_round(cents: i64, factor: i64) -> i64 {
    let product = cents as i128 * factor as i128;
    let half = if product >= 0 { 5000 } else { -5000 };
    ((product + half) / 10_000) as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount without a currency symbol; whether a value is
/// USD or Bs is decided by the field it came from.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.times(4).cents(), 4000);
    }

    #[test]
    fn test_tax_basic() {
        // 100.00 at 30% = 30.00 exactly
        let amount = Money::from_cents(10_000);
        let rate = TaxRate::from_bps(3000);
        assert_eq!(amount.tax(rate).cents(), 3_000);
    }

    #[test]
    fn test_tax_rounds_at_boundary() {
        // 10.00 at 8.25% = 0.825 → 0.83
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(825);
        assert_eq!(amount.tax(rate).cents(), 83);
    }

    #[test]
    fn test_conversion_basic() {
        // 130.00 USD at 35.5000 = Bs 4615.00 exactly
        let total = Money::from_cents(13_000);
        let rate = ExchangeRate::from_scaled(355_000);
        assert_eq!(total.to_b(rate).cents(), 461_500);
    }

    #[test]
    fn test_conversion_rounds_at_boundary() {
        // 0.01 USD at 35.5000 = 35.5 Bs-cents → 36
        let total = Money::from_cents(1);
        let rate = ExchangeRate::from_scaled(355_000);
        assert_eq!(total.to_b(rate).cents(), 36);

        // 0.01 USD at 0.4000 = 0.4 Bs-cents, below the half-cent mark → 0
        let rate = ExchangeRate::from_scaled(4_000);
        assert_eq!(total.to_b(rate).cents(), 0);

        // 0.01 USD at 0.6000 = 0.6 Bs-cents, above the half-cent mark → 1
        let rate = ExchangeRate::from_scaled(6_000);
        assert_eq!(total.to_b(rate).cents(), 1);
    }

    #[test]
    fn test_conversion_negative_exact() {
        // Exact multiples stay exact on both sides of zero
        let rate = ExchangeRate::from_scaled(100_000); // 10.0000
        assert_eq!(Money::from_cents(-24).to_b(rate).cents(), -240);
        assert_eq!(Money::from_cents(24).to_b(rate).cents(), 240);

        // Halves round away from zero
        let rate = ExchangeRate::from_scaled(355_000);
        assert_eq!(Money::from_cents(4545).to_b(rate).cents(), 161_348);
        assert_eq!(Money::from_cents(-4545).to_b(rate).cents(), -161_348);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
