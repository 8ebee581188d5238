//! Monetary amount type for expense records
//!
//! Wraps an `f64` so that parsing, validation predicates, and currency
//! formatting live in one place. Amounts are persisted as plain JSON
//! numbers; deserialization applies a lenient coercion policy so that
//! legacy data with string amounts still loads (see [`Amount::coerce`]).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A monetary amount in the user's (single) currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an Amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain decimals as well as currency-formatted strings:
    /// `"12.50"`, `"$12.50"`, `"1,250"`, `" 12 "`.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
            .collect();

        let value: f64 = cleaned
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(value))
    }

    /// Lenient coercion policy applied when loading persisted data
    ///
    /// A JSON number is taken as-is; a string is parsed as a currency
    /// string; anything unparseable (or any other JSON type) becomes 0.
    pub fn coerce(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => Self(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Self::parse(s).unwrap_or_else(|_| Self::zero()),
            _ => Self::zero(),
        }
    }

    /// Format with a currency symbol, two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0.0 {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::coerce(&value))
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
