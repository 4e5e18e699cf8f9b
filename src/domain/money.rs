//! Fixed-point currency amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a string does not parse as a monetary amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid monetary amount: '{input}'")]
pub struct ParseMoneyError {
    input: String,
}

/// A monetary amount in integer cents.
///
/// Two decimal places, no floating-point drift: the wrapped value is the
/// amount times one hundred. Displayed as `1234.56`.
///
/// # Examples
///
/// ```rust
/// use verdict::domain::Money;
///
/// let amount: Money = "1234.56".parse().unwrap();
/// assert_eq!(amount.cents(), 123_456);
/// assert_eq!(amount.to_string(), "1234.56");
/// assert!(amount > Money::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a cent count.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// The amount as a floating-point value in currency units.
    ///
    /// For display and rate arithmetic only; the canonical representation
    /// stays integral.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Creates an amount from a floating-point value, rounding half-even
    /// to the nearest cent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64_half_even(value: f64) -> Self {
        Self((value * 100.0).round_ties_even() as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseMoneyError {
            input: s.to_owned(),
        };
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty()
            || fraction.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(error());
        }
        let whole: i64 = whole.parse().map_err(|_| error())?;
        let mut cents_fraction: i64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| error())?
        };
        if fraction.len() == 1 {
            cents_fraction *= 10;
        }
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_fraction))
            .ok_or_else(error)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
