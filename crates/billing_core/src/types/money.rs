//! Exact base-10 monetary amounts.
//!
//! This module provides `Money`, a wrapper around `rust_decimal::Decimal`
//! holding an amount with a fixed scale of 2. Rounding happens exactly once,
//! at construction, using a half-up rule (midpoint away from zero); sums and
//! differences of already-constructed amounts are exact and never re-rounded,
//! which keeps schedule totals reproducible across platforms.
//!
//! # Examples
//!
//! ```
//! use billing_core::types::Money;
//!
//! let daily = Money::from_f64(60.0).unwrap();
//! let monthly = daily.times(65.0 / 6.0);
//! assert_eq!(monthly.to_string(), "650.00");
//!
//! let total = monthly + Money::from_f64(90.0).unwrap();
//! assert_eq!(total.to_string(), "740.00");
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use super::error::MoneyError;

/// A monetary amount with a fixed scale of 2 decimal places.
///
/// The amount is rounded half-up exactly once when the value is
/// constructed; arithmetic between `Money` values is exact.
///
/// # Examples
///
/// ```
/// use billing_core::types::Money;
/// use rust_decimal::Decimal;
///
/// let a = Money::new(Decimal::new(65005, 3)); // 65.005
/// assert_eq!(a.to_string(), "65.01");         // half-up, once
///
/// let b = Money::from_f64(10.0).unwrap();
/// assert_eq!((a - b).to_string(), "55.01");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(Decimal);

impl Money {
    /// Creates a monetary amount from a decimal value.
    ///
    /// The value is rounded half-up to 2 decimal places; this is the single
    /// rounding step in the life of the amount.
    pub fn new(amount: Decimal) -> Self {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Money(rounded)
    }

    /// Creates a zero amount.
    pub fn zero() -> Self {
        Money::new(Decimal::ZERO)
    }

    /// Creates a monetary amount from a floating-point value.
    ///
    /// # Returns
    /// `Err(MoneyError::Unrepresentable)` when the value is not finite or
    /// exceeds the representable decimal range.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Money;
    ///
    /// assert_eq!(Money::from_f64(90.0).unwrap().to_string(), "90.00");
    /// assert!(Money::from_f64(f64::NAN).is_err());
    /// ```
    pub fn from_f64(value: f64) -> Result<Self, MoneyError> {
        Decimal::from_f64(value)
            .map(Money::new)
            .ok_or_else(|| MoneyError::Unrepresentable {
                value: value.to_string(),
            })
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns whether the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies this amount by a fractional quantity (days, hours) and
    /// constructs a new amount, rounding once.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is not finite. Callers validate quantities at the
    /// input boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Money;
    ///
    /// let daily = Money::from_f64(60.0).unwrap();
    /// assert_eq!(daily.times(2.0).to_string(), "120.00");
    /// assert_eq!(daily.times(65.0 / 6.0).to_string(), "650.00");
    /// ```
    pub fn times(&self, factor: f64) -> Money {
        assert!(factor.is_finite(), "quantity factor must be finite");
        let factor =
            Decimal::from_f64(factor).expect("finite quantity is representable as a decimal");
        Money::new(self.0 * factor)
    }

    /// Takes a percentage of this amount, rounding once.
    ///
    /// # Panics
    ///
    /// Panics if `percent` is not finite. Callers validate percentages at
    /// the input boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_core::types::Money;
    ///
    /// let monthly = Money::from_f64(650.0).unwrap();
    /// assert_eq!(monthly.percentage(10.0).to_string(), "65.00");
    /// ```
    pub fn percentage(&self, percent: f64) -> Money {
        assert!(percent.is_finite(), "percentage must be finite");
        let percent =
            Decimal::from_f64(percent).expect("finite percentage is representable as a decimal");
        Money::new(self.0 * percent / Decimal::ONE_HUNDRED)
    }
}

impl Add for Money {
    type Output = Money;

    /// Exact addition; both operands already carry scale 2.
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    /// Exact subtraction; the result may be negative.
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, item| acc + item)
    }
}

impl fmt::Display for Money {
    /// Formats the amount with its fixed 2-decimal scale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
