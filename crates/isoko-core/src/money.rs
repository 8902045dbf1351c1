//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: integer francs                                       │
//! │    The Rwandan franc has no minor unit in circulation, so Money     │
//! │    is a plain i64 count of francs. All arithmetic is exact; the     │
//! │    only rounding point is VAT, which rounds half-up explicitly.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use isoko_core::money::Money;
//!
//! let price = Money::from_francs(3_500);
//! let line = price.multiply_quantity(2);
//! assert_eq!(line.francs(), 7_000);
//! assert_eq!(line.to_string(), "RWF 7,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;
use crate::CURRENCY_CODE;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Rwandan francs.
///
/// ## Design
/// - **i64 (signed)**: room for aggregate totals far beyond any demo catalog
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, total ordering for sorting by revenue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a franc amount.
    ///
    /// ## Example
    /// ```rust
    /// use isoko_core::money::Money;
    ///
    /// let price = Money::from_francs(800);
    /// assert_eq!(price.francs(), 800);
    /// ```
    #[inline]
    pub const fn from_francs(francs: i64) -> Self {
        Money(francs)
    }

    /// Returns the value in francs.
    #[inline]
    pub const fn francs(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the VAT due on this amount, rounding half-up.
    ///
    /// ## Implementation
    /// Integer math in basis points: `(amount * bps + 5000) / 10000`.
    /// The `+5000` term provides the half-up rounding (5000/10000 = 0.5).
    /// Intermediate math is widened to i128 so large totals cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use isoko_core::money::Money;
    /// use isoko_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_francs(2_000);
    /// let vat = subtotal.calculate_vat(TaxRate::from_bps(1_800)); // 18%
    /// assert_eq!(vat.francs(), 360);
    /// ```
    pub fn calculate_vat(&self, rate: TaxRate) -> Money {
        let vat = (self.0 as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money(vat as i64)
    }

    /// Multiplies money by a quantity (line totals).
    ///
    /// ## Example
    /// ```rust
    /// use isoko_core::money::Money;
    ///
    /// let unit_price = Money::from_francs(500);
    /// assert_eq!(unit_price.multiply_quantity(3).francs(), 1_500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Divides evenly across `count` parts, discarding the remainder.
    ///
    /// Used for average-transaction figures; a zero count yields zero
    /// rather than dividing by zero.
    pub fn divide_count(&self, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }
        Money(self.0 / count as i64)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Groups the digits of a non-negative number with comma separators.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Displays money with the fixed currency prefix and grouped digits,
/// e.g. `RWF 3,500`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{} {}{}",
            CURRENCY_CODE,
            sign,
            group_digits(self.0.unsigned_abs())
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

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

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals and report aggregates.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
