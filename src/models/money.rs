//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Only one currency exists; the symbol is a display concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbol used by the plain `Display` impl
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Largest absolute amount accepted from input: one billion units
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000);

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_dashboard::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "10,50", "-10.50", "R$ 10.50", "$10.50" and "10".
    /// More than two fractional digits is rejected rather than rounded, and
    /// amounts beyond [`MAX_AMOUNT`] are rejected as too large.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped.trim_start())
        } else {
            (false, s)
        };

        let s = s
            .strip_prefix("R$")
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s)
            .trim();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        // A comma is the decimal separator when no dot is present ("10,50")
        let normalized = if s.contains('.') {
            s.to_string()
        } else {
            s.replacen(',', ".", 1)
        };

        let (units_str, cents_str) = match normalized.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (normalized.as_str(), ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (units_str.is_empty() && cents_str.is_empty())
            || !all_digits(units_str)
            || !all_digits(cents_str)
        {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        if cents_str.len() > 2 {
            return Err(MoneyParseError::TooPrecise(original.to_string()));
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?
        };

        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?
                * 10,
            _ => cents_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .filter(|total| *total <= MAX_AMOUNT.0)
            .ok_or_else(|| MoneyParseError::TooLarge(original.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. "R$ 10.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if symbol.is_empty() {
            format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
        } else {
            format!(
                "{}{} {}.{:02}",
                sign,
                symbol,
                self.units().abs(),
                self.cents_part()
            )
        }
    }

    /// Plain decimal representation without symbol, e.g. "-10.50"
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount exceeds the maximum of {}: {}", MAX_AMOUNT, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
