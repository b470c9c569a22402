//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. On the wire (the
//! catalog file) prices are plain decimal numbers.
//!
//! Amounts are held in `i128` cents so a catalog price times any `i64`
//! quantity is representable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i128 = 100;

/// A monetary value in the store currency.
///
/// Amounts are stored in cents. Serialized as a decimal number, so
/// `19.99` in JSON becomes `Money { amount_cents: 1999 }`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i128,
}

impl Money {
    /// Largest unit price a catalog may carry.
    pub const MAX_PRICE: Money = Money::from_cents(i64::MAX as i128);

    /// Create a new Money value from cents.
    pub const fn from_cents(amount_cents: i128) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * CENTS_PER_UNIT as f64).round() as i128)
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}${}", sign, self.abs_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}", sign, self.abs_amount())
    }

    fn abs_amount(&self) -> String {
        let cents = self.amount_cents.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u128;
        format!("{}.{:02}", cents / per_unit, cents % per_unit)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(i128::from(factor))
            .map(Money::from_cents)
    }

    /// Add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(Money::from_cents)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if !amount.is_finite() {
            return Err(format!("amount is not a finite number: {}", amount));
        }
        Ok(Money::from_decimal(amount))
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(19.99).amount_cents, 1999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(3998).display_amount(), "39.98");
        assert_eq!(Money::from_cents(5).display_amount(), "0.05");
        assert_eq!(Money::from_cents(-150).display(), "-$1.50");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_cents(1999);
        assert_eq!(m.try_multiply(2), Some(Money::from_cents(3998)));
        assert_eq!(Money::from_cents(i128::MAX).try_multiply(2), None);

        let widest = Money::MAX_PRICE.try_multiply(i64::MAX).unwrap();
        assert_eq!(widest.amount_cents, i128::from(i64::MAX) * i128::from(i64::MAX));
    }

    #[test]
    fn test_money_display_beyond_i64() {
        let m = Money::from_cents(1999).try_multiply(1_000_000_000_000_000_000).unwrap();
        assert_eq!(m.display(), "$19990000000000000000.00");
    }

    #[test]
    fn test_money_sum() {
        let items = [Money::from_cents(1000), Money::from_cents(250)];
        assert_eq!(Money::try_sum(items.iter()), Some(Money::from_cents(1250)));
        assert_eq!(Money::try_sum(std::iter::empty()), Some(Money::zero()));

        let overflow = [Money::from_cents(i128::MAX), Money::from_cents(1)];
        assert_eq!(Money::try_sum(overflow.iter()), None);
    }

    #[test]
    fn test_money_serde_as_decimal() {
        let m: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(m.amount_cents, 1999);

        let m: Money = serde_json::from_str("5").unwrap();
        assert_eq!(m.amount_cents, 500);

        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");
    }
}
