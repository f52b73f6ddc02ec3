//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts stay exact under the
//! percentage arithmetic the allocation engine performs. The type is
//! currency-agnostic; the symbol only appears when formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount
///
/// No sign or range restrictions are applied: incomes, balances, and costs
/// are taken exactly as entered. The arithmetic operators saturate at
/// `Money::MAX` and `Money::MIN` instead of panicking; use the `checked_*`
/// methods where an overflow has to be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Largest representable amount
    pub const MAX: Money = Money(Decimal::MAX);

    /// Smallest representable amount
    pub const MIN: Money = Money(Decimal::MIN);

    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use econome::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Addition, or `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction, or `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Scale by `factor`, or `None` on overflow
    pub fn checked_mul(self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Clamp to the end of the range that an overflowing result ran past
    fn bound(positive: bool) -> Self {
        if positive {
            Self::MAX
        } else {
            Self::MIN
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "10", "1,200.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
        if rest.is_empty() || rest.starts_with('-') || rest.starts_with('+') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(&rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, rounded to two places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let magnitude = self.0.abs().round_dp(2);
        if self.is_negative() && !magnitude.is_zero() {
            format!("-{}{:.2}", symbol, magnitude)
        } else {
            format!("{}{:.2}", symbol, magnitude)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(other).unwrap_or_else(|| Self::bound(other.is_positive()))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other).unwrap_or_else(|| Self::bound(other.is_negative()))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.checked_mul(factor)
            .unwrap_or_else(|| Self::bound(self.is_negative() == factor.is_sign_negative()))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.amount(), dec!(10.50));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::new(dec!(333.3333)).to_string(), "$333.33");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(1200)).format_with_symbol("€"), "€1200.00");
        assert_eq!(Money::new(dec!(-3.5)).format_with_symbol("£"), "-£3.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.00));

        assert_eq!((a + b).amount(), dec!(15.00));
        assert_eq!((a - b).amount(), dec!(5.00));
        assert_eq!((-a).amount(), dec!(-10.00));
        assert_eq!((a * dec!(0.25)).amount(), dec!(2.50));
    }

    #[test]
    fn test_arithmetic_saturates_at_the_range_ends() {
        let one = Money::new(dec!(1));

        assert_eq!(Money::MAX + one, Money::MAX);
        assert_eq!(Money::MIN + -one, Money::MIN);
        assert_eq!(Money::MAX - -one, Money::MAX);
        assert_eq!(Money::MIN - one, Money::MIN);
        assert_eq!(Money::MAX * dec!(2), Money::MAX);
        assert_eq!(Money::MAX * dec!(-2), Money::MIN);
        assert_eq!(Money::MIN * dec!(-2), Money::MAX);

        let mut balance = Money::MAX;
        balance += one;
        assert_eq!(balance, Money::MAX);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let one = Money::new(dec!(1));

        assert_eq!(Money::MAX.checked_add(one), None);
        assert_eq!(Money::MAX.checked_sub(-one), None);
        assert_eq!(Money::MAX.checked_mul(dec!(2)), None);
        assert_eq!(one.checked_sub(one), Some(Money::zero()));
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = [Money::MAX, Money::MAX].into_iter().sum();
        assert_eq!(total, Money::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("$10.50").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::parse("-10.50").unwrap().amount(), dec!(-10.50));
        assert_eq!(Money::parse("-$10.50").unwrap().amount(), dec!(-10.50));
        assert_eq!(Money::parse("10").unwrap().amount(), dec!(10));
        assert_eq!(Money::parse(" 1,200.00 ").unwrap().amount(), dec!(1200.00));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::new(dec!(10)));
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::from_cents(-100).abs(), Money::from_cents(100));
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(dec!(10.50));
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
