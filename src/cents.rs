//! Signed integer-cents monetary type.
//!
//! Record amounts are held as whole cents; decimal rendering via
//! `rust_decimal` happens only at the boundary, so no floating-point
//! value ever touches a monetary total.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

/// A monetary amount in whole cents.
///
/// Debit-classified entries carry a negative value; the unsigned
/// fixed-width amount fields always receive the magnitude.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use nacha_codec::Cents;
///
/// let amount = Cents::from_str("10.25").unwrap();
/// assert_eq!(amount.raw(), 1025);
/// assert_eq!(amount.to_string(), "10.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(i64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Wraps a whole-cent value.
    pub fn new(cents: i64) -> Self {
        Cents(cents)
    }

    /// The underlying whole-cent value.
    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Unsigned magnitude, as written into amount fields.
    pub fn magnitude(&self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Cents(self.0.abs())
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for amounts on the debit side.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Boundary rendering as a 2-decimal value.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl FromStr for Cents {
    type Err = rust_decimal::Error;

    /// Parses a human decimal string (`"10.25"`) into whole cents,
    /// rounding anything beyond two decimal places.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut decimal = Decimal::from_str(s.trim())?;
        decimal.rescale(2);
        let cents = i64::try_from(decimal.mantissa())
            .map_err(|_| rust_decimal::Error::ExceedsMaximumPossibleValue)?;
        Ok(Cents(cents))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Cents(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Cents(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_whole_and_fractional() {
        assert_eq!(Cents::from_str("10.25").unwrap().raw(), 1025);
        assert_eq!(Cents::from_str("10").unwrap().raw(), 1000);
        assert_eq!(Cents::from_str("0.05").unwrap().raw(), 5);
        assert_eq!(Cents::from_str("  2.5  ").unwrap().raw(), 250);
    }

    #[test]
    fn test_from_str_negative() {
        assert_eq!(Cents::from_str("-2.50").unwrap().raw(), -250);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Cents::from_str("abc").is_err());
        assert!(Cents::from_str("").is_err());
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(Cents::new(0).to_string(), "0.00");
        assert_eq!(Cents::new(5).to_string(), "0.05");
        assert_eq!(Cents::new(1000).to_string(), "10.00");
        assert_eq!(Cents::new(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_magnitude_drops_sign() {
        assert_eq!(Cents::new(-250).magnitude(), 250);
        assert_eq!(Cents::new(250).magnitude(), 250);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cents::new(150);
        let b = Cents::new(50);
        assert_eq!((a + b).raw(), 200);
        assert_eq!((a - b).raw(), 100);
        assert_eq!((-a).raw(), -150);

        let mut total = Cents::ZERO;
        total += a;
        total += b;
        assert_eq!(total.raw(), 200);
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Cents::ZERO.is_zero());
        assert!(Cents::new(-1).is_negative());
        assert!(!Cents::new(1).is_negative());
    }
}
