use alloc::string::String;
use core::cmp::Ordering;

use crate::decimal::{Decimal, RoundingMode};
use crate::error::CoreResult;

/// A value denominated in an issued (non-native) currency.
///
/// Accepts any decimal string; non-zero magnitudes are canonicalized into
/// `[10^-81, (10^16-1)*10^80]` by the underlying [`Decimal`] engine. Values
/// below the minimum underflow to zero; values above the maximum are
/// rejected with `Overflow` — both checks are intrinsic to the canonical
/// representation and are not affected by
/// [`crate::value::set_strict_mode`], which only governs the native-value
/// magnitude cap.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedValue {
    decimal: Decimal,
}

impl IssuedValue {
    /// The zero value.
    pub fn zero() -> Self {
        IssuedValue {
            decimal: Decimal::zero(),
        }
    }

    /// The NaN sentinel, used to mark an invalid issued amount.
    pub fn nan() -> Self {
        IssuedValue {
            decimal: Decimal::nan(),
        }
    }

    /// Parse an arbitrary decimal string, e.g. `"1.5"`, `"-0.0000001"`.
    pub fn parse(value: &str) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: Decimal::parse(value)?,
        })
    }

    /// Construct directly from a canonical sign/coefficient/exponent triple.
    pub fn from_parts(negative: bool, coefficient: u64, exponent: i32) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: Decimal::from_parts(negative, coefficient, exponent)?,
        })
    }

    pub fn is_nan(&self) -> bool {
        self.decimal.is_nan()
    }

    pub fn is_zero(&self) -> bool {
        self.decimal.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.decimal.is_negative()
    }

    /// Canonical 16-digit coefficient, or `None` for NaN.
    pub fn coefficient(&self) -> Option<u64> {
        self.decimal.coefficient()
    }

    /// Canonical exponent, or `None` for NaN.
    pub fn exponent(&self) -> Option<i32> {
        self.decimal.exponent()
    }

    pub fn negate(&self) -> Self {
        IssuedValue {
            decimal: self.decimal.negate(),
        }
    }

    pub fn abs(&self) -> Self {
        IssuedValue {
            decimal: self.decimal.abs(),
        }
    }

    pub fn invert(&self) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: self.decimal.invert()?,
        })
    }

    pub fn add(&self, other: &IssuedValue) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: self.decimal.add(&other.decimal)?,
        })
    }

    pub fn subtract(&self, other: &IssuedValue) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: self.decimal.subtract(&other.decimal)?,
        })
    }

    pub fn multiply(&self, other: &IssuedValue) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: self.decimal.multiply(&other.decimal)?,
        })
    }

    pub fn divide(&self, other: &IssuedValue) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: self.decimal.divide(&other.decimal)?,
        })
    }

    pub fn round(&self, digits: u32, mode: RoundingMode) -> CoreResult<Self> {
        Ok(IssuedValue {
            decimal: self.decimal.round(digits, mode)?,
        })
    }

    pub fn compare(&self, other: &IssuedValue) -> Option<Ordering> {
        self.decimal.compare(&other.decimal)
    }

    pub(crate) fn decimal(&self) -> &Decimal {
        &self.decimal
    }
}

impl core::fmt::Display for IssuedValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.decimal)
    }
}

impl ToString for IssuedValue {
    fn to_string(&self) -> String {
        alloc::format!("{self}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let value = IssuedValue::parse("1.5").unwrap();
        assert_eq!(value.to_string(), "1.5");
    }

    #[test]
    fn test_minimum_magnitude_is_accepted() {
        let value = IssuedValue::from_parts(false, 1_000_000_000_000_000, -96).unwrap();
        assert!(!value.is_zero());
    }

    #[test]
    fn test_below_minimum_underflows_to_zero() {
        let value = IssuedValue::parse("1e-82").unwrap();
        assert!(value.is_zero());
    }

    #[test]
    fn test_above_maximum_overflows() {
        assert!(IssuedValue::parse("1e96").is_err());
    }

    #[test]
    fn test_arithmetic_round_trip() {
        let a = IssuedValue::parse("10").unwrap();
        let b = IssuedValue::parse("4").unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.to_string(), "14");
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.to_string(), "40");
    }

    #[test]
    fn test_nan_is_not_comparable() {
        assert_eq!(IssuedValue::nan().compare(&IssuedValue::zero()), None);
    }
}
