use alloc::string::{String, ToString};
use core::cmp::Ordering;

use crate::constants::{DROPS_PER_NATIVE_UNIT, MAX_NATIVE_DROPS};
use crate::decimal::{Decimal, RoundingMode};
use crate::error::{CoreError, CoreResult, ValueError};
use crate::value::is_strict_mode;

/// A value denominated in the native asset's atomic unit (drops).
///
/// Always an integer; the wire form is the drops string itself, while the
/// human form is whole units of the native asset (`units = drops / 10^6`).
#[derive(Debug, Clone, PartialEq)]
pub struct NativeValue {
    decimal: Decimal,
}

impl NativeValue {
    /// The zero drops value.
    pub fn zero() -> Self {
        NativeValue {
            decimal: Decimal::zero(),
        }
    }

    /// Parse a wire-form integer drops string, e.g. `"1000000"` or `"-42"`.
    pub fn from_drops(drops: &str) -> CoreResult<Self> {
        let trimmed = drops.trim();
        let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidNumber(drops.to_string()).into());
        }
        Self::from_decimal(Decimal::parse(trimmed)?)
    }

    /// Interpret a human decimal string as whole units of the native asset
    /// (e.g. `"25.2"` meaning 25.2 XRP) and convert to drops.
    pub fn from_units(units: &str) -> CoreResult<Self> {
        let value = Decimal::parse(units)?;
        let drops_per_unit = Decimal::from_parts(false, DROPS_PER_NATIVE_UNIT, 0)?;
        let drops = value.multiply(&drops_per_unit)?;
        Self::from_decimal(drops.round(0, RoundingMode::Down)?)
    }

    fn from_decimal(decimal: Decimal) -> CoreResult<Self> {
        if decimal.is_nan() {
            return Err(ValueError::InvalidNumber("NaN".to_string()).into());
        }
        if !decimal.is_zero() {
            if let Some(exponent) = decimal.exponent() {
                if exponent < 0 {
                    return Err(
                        ValueError::InvalidNumber("drops must be an integer".to_string()).into(),
                    );
                }
            }
        }
        let value = NativeValue { decimal };
        if is_strict_mode() {
            value.check_range()?;
        }
        Ok(value)
    }

    fn check_range(&self) -> CoreResult<()> {
        let limit = Decimal::from_parts(false, MAX_NATIVE_DROPS, 0)?;
        if self.decimal.abs().compare(&limit) == Some(Ordering::Greater) {
            return Err(CoreError::OutOfRange(
                "native value exceeds maximum drops".to_string(),
            ));
        }
        Ok(())
    }

    /// True if this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.decimal.is_zero()
    }

    /// True if this value is negative.
    pub fn is_negative(&self) -> bool {
        self.decimal.is_negative()
    }

    /// Render the wire-form integer drops string.
    pub fn to_drops(&self) -> String {
        self.decimal.to_fixed(0)
    }

    /// Render whole units of the native asset, e.g. `"25.2"`.
    pub fn to_units(&self) -> CoreResult<String> {
        let drops_per_unit = Decimal::from_parts(false, DROPS_PER_NATIVE_UNIT, 0)?;
        Ok(self.decimal.divide(&drops_per_unit)?.to_string())
    }

    pub fn negate(&self) -> Self {
        NativeValue {
            decimal: self.decimal.negate(),
        }
    }

    pub fn abs(&self) -> Self {
        NativeValue {
            decimal: self.decimal.abs(),
        }
    }

    pub fn add(&self, other: &NativeValue) -> CoreResult<Self> {
        Self::from_decimal(self.decimal.add(&other.decimal)?)
    }

    pub fn subtract(&self, other: &NativeValue) -> CoreResult<Self> {
        Self::from_decimal(self.decimal.subtract(&other.decimal)?)
    }

    pub fn multiply(&self, other: &NativeValue) -> CoreResult<Self> {
        Self::from_decimal(self.decimal.multiply(&other.decimal)?)
    }

    pub fn divide(&self, other: &NativeValue) -> CoreResult<Self> {
        let quotient = self.decimal.divide(&other.decimal)?;
        Self::from_decimal(quotient.round(0, RoundingMode::Down)?)
    }

    pub fn compare(&self, other: &NativeValue) -> Option<Ordering> {
        self.decimal.compare(&other.decimal)
    }

    pub(crate) fn decimal(&self) -> &Decimal {
        &self.decimal
    }
}

impl core::fmt::Display for NativeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_drops())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_drops_round_trip() {
        let value = NativeValue::from_drops("1000000").unwrap();
        assert_eq!(value.to_drops(), "1000000");
    }

    #[test]
    fn test_from_units_converts_to_drops() {
        let value = NativeValue::from_units("25.2").unwrap();
        assert_eq!(value.to_drops(), "25200000");
    }

    #[test]
    fn test_rejects_fractional_drops() {
        assert!(NativeValue::from_drops("1.5").is_err());
    }

    #[test]
    fn test_rejects_non_numeric_drops() {
        assert!(NativeValue::from_drops("abc").is_err());
    }

    #[test]
    fn test_negative_drops_round_trip() {
        let value = NativeValue::from_drops("-42").unwrap();
        assert!(value.is_negative());
        assert_eq!(value.to_drops(), "-42");
    }

    #[test]
    fn test_maximum_drops_is_accepted() {
        let value = NativeValue::from_drops("100000000000000000").unwrap();
        assert!(!value.is_negative());
    }

    #[test]
    fn test_above_maximum_drops_is_rejected() {
        let _guard = crate::value::strict_mode_test_lock::guard();
        assert!(NativeValue::from_drops("100000000000000001").is_err());
    }

    #[test]
    fn test_strict_mode_disabled_allows_out_of_range() {
        let _guard = crate::value::strict_mode_test_lock::guard();
        crate::value::set_strict_mode(false);
        let result = NativeValue::from_drops("999999999999999999");
        crate::value::set_strict_mode(true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_add_and_subtract() {
        let a = NativeValue::from_drops("100").unwrap();
        let b = NativeValue::from_drops("40").unwrap();
        assert_eq!(a.add(&b).unwrap().to_drops(), "140");
        assert_eq!(a.subtract(&b).unwrap().to_drops(), "60");
    }

    #[test]
    fn test_multiply_and_divide() {
        let a = NativeValue::from_drops("25200000").unwrap();
        let b = NativeValue::from_drops("4").unwrap();
        assert_eq!(a.multiply(&b).unwrap().to_drops(), "100800000");
        assert_eq!(a.divide(&b).unwrap().to_drops(), "6300000");
    }
}
