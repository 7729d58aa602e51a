//! Money types with precise decimal arithmetic
//!
//! Amounts arrive from document extraction as JSON numbers (binary floats).
//! This module converts them into `rust_decimal` values so that display
//! rounding and digit grouping are exact and locale-stable.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency of claim amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount with associated currency
///
/// The amount is kept exactly as given; rounding only happens when the
/// value is rendered for people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Maximum fraction digits shown by the grouped (`Display`) rendering
    pub const DISPLAY_FRACTION_DIGITS: u32 = 3;

    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from a float, rejecting NaN, infinities and values
    /// outside the decimal range
    pub fn from_f64(value: f64, currency: Currency) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidAmount(value.to_string()));
        }
        let amount = Decimal::try_from(value)
            .map_err(|e| MoneyError::InvalidAmount(format!("{value}: {e}")))?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Shortest plain rendering: no grouping, no trailing zeros (`5000`, `1234.5`)
    pub fn to_plain_string(&self) -> String {
        self.amount.normalize().to_string()
    }

    /// Thousands-separated rendering rounded half away from zero to at most
    /// `max_fraction_digits` digits, trailing zeros dropped (`1,234.568`)
    pub fn to_grouped_string(&self, max_fraction_digits: u32) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        if rounded.is_zero() {
            return "0".to_string();
        }
        group_thousands(&rounded.to_string())
    }
}

/// Inserts `,` between groups of three integer digits of a plain number
/// rendering such as `-1234567.5`. Fraction digits are left untouched.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(number.len() + integer.len() / 3);
    out.push_str(sign);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.currency.symbol(),
            self.to_grouped_string(Self::DISPLAY_FRACTION_DIGITS)
        )
    }
}
