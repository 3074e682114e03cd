//! Order-book quality codec (component C7): the 64-bit packed
//! exponent/mantissa ratio that forms the low bits of an order-book
//! directory index.
//!
//! Grounded on `other_examples/7418867f_589labs-xrpl-rust__src-core-types-amount.rs.rs`'s
//! `_serialize_issued_currency_value` mantissa/exponent packing, reusing this
//! crate's own [`crate::value::IssuedValue`] canonical form instead of
//! re-deriving the bit math, and on `constants::QUALITY_EXPONENT_BIAS`.

use alloc::string::ToString;

use crate::amount::Amount;
use crate::constants::{DROPS_PER_NATIVE_UNIT, QUALITY_EXPONENT_BIAS};
use crate::currency::Currency;
use crate::decimal::RoundingMode;
use crate::error::{CoreError, CoreResult};
use crate::uint::UInt160;
use crate::value::IssuedValue;

/// Options accepted by [`parse_quality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityOptions {
    /// Invert the decoded ratio (sell-side quality → bid price).
    pub inverse: bool,
    /// Suppress the drops/XRP unit conversion for native operands.
    pub xrp_as_drops: bool,
    /// Divide by the base currency's interest factor at this date.
    pub reference_date: Option<i64>,
}

/// A decoded order-book quality ratio, before unit/interest adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct Quality {
    value: IssuedValue,
}

impl Quality {
    fn from_packed(packed: u64) -> CoreResult<Self> {
        let exponent_byte = (packed >> 56) as u8;
        let mantissa = packed & 0x00FF_FFFF_FFFF_FFFF;
        let exponent = exponent_byte as i32 - QUALITY_EXPONENT_BIAS;
        Ok(Quality {
            value: IssuedValue::from_parts(false, mantissa, exponent)?,
        })
    }

    fn to_packed(&self) -> CoreResult<u64> {
        let coefficient = self
            .value
            .coefficient()
            .ok_or_else(|| CoreError::InvalidArgument("quality value is NaN".to_string()))?;
        let exponent = self
            .value
            .exponent()
            .ok_or_else(|| CoreError::InvalidArgument("quality value is NaN".to_string()))?;
        let exponent_byte = (exponent + QUALITY_EXPONENT_BIAS) as u8;
        Ok((exponent_byte as u64) << 56 | (coefficient & 0x00FF_FFFF_FFFF_FFFF))
    }

    /// Encode an issued ratio as the packed 64-bit quality value.
    pub fn encode(value: &IssuedValue) -> CoreResult<u64> {
        Quality {
            value: value.clone(),
        }
        .to_packed()
    }

    /// Decode the low 64 bits of a quality/directory-index hex string.
    pub fn decode(quality_hex: &str) -> CoreResult<Self> {
        if quality_hex.len() < 16 {
            return Err(CoreError::InvalidArgument(quality_hex.to_string()));
        }
        let tail = &quality_hex[quality_hex.len() - 16..];
        let packed = u64::from_str_radix(tail, 16)
            .map_err(|_| CoreError::InvalidArgument(quality_hex.to_string()))?;
        Quality::from_packed(packed)
    }
}

fn drops_per_unit() -> CoreResult<IssuedValue> {
    IssuedValue::parse(&DROPS_PER_NATIVE_UNIT.to_string())
}

/// Decode a book-directory quality hex string into a priced [`Amount`]
/// denominated in `counter_currency`, adjusting for the native-asset
/// drops/unit mismatch and (optionally) the base currency's interest.
pub fn parse_quality(
    quality_hex: &str,
    base_currency: &Currency,
    counter_currency: &Currency,
    counter_issuer: UInt160,
    opts: QualityOptions,
) -> CoreResult<Amount> {
    if base_currency.is_native() && counter_currency.is_native() {
        return Err(CoreError::InvalidArgument(
            "quality between two native amounts is not meaningful".to_string(),
        ));
    }

    let mut quality = Quality::decode(quality_hex)?;
    if opts.inverse {
        quality.value = quality.value.invert()?;
    }

    if !opts.xrp_as_drops {
        if counter_currency.is_native() {
            quality.value = quality.value.divide(&drops_per_unit()?)?;
        } else if base_currency.is_native() {
            quality.value = quality.value.multiply(&drops_per_unit()?)?;
        }
    }

    if let Some(date) = opts.reference_date {
        if base_currency.has_interest() {
            let factor = base_currency.get_interest_at(date);
            let divisor = IssuedValue::parse(&alloc::format!("{factor}"))?;
            quality.value = quality.value.divide(&divisor)?;
        }
    }

    if counter_currency.is_native() {
        let rounded = quality.value.round(6, RoundingMode::Down)?;
        let drops = rounded.multiply(&drops_per_unit()?)?;
        Amount::native(&drops.to_string())
    } else {
        Amount::issued(
            &quality.value.to_string(),
            counter_currency.clone(),
            counter_issuer,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let value = IssuedValue::parse("1.5").unwrap();
        let packed = Quality::encode(&value).unwrap();
        let decoded = Quality::decode(&alloc::format!("{packed:016X}")).unwrap();
        assert_eq!(decoded.value.to_string(), value.to_string());
    }

    #[test]
    fn test_same_native_currency_rejected() {
        let result = parse_quality(
            "0000000000000000000000000000000000000000000000010000000000000A",
            &Currency::Native,
            &Currency::Native,
            UInt160::account_one(),
            QualityOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_issued_counter_currency_decodes() {
        // A native base currency multiplies the decoded ratio by
        // DROPS_PER_NATIVE_UNIT (no reference_date, so no interest
        // adjustment): 2 * 1,000,000 = 2,000,000. See DESIGN.md for the
        // open question this pins down.
        let value = IssuedValue::parse("2").unwrap();
        let packed = Quality::encode(&value).unwrap();
        let hex = alloc::format!("{packed:016X}");
        let amount = parse_quality(
            &hex,
            &Currency::Native,
            &Currency::from_human("USD").unwrap(),
            UInt160::account_one(),
            QualityOptions::default(),
        )
        .unwrap();
        assert!(!amount.is_native());
        let (negative, coefficient, exponent) = amount.issued_parts().unwrap();
        assert!(!negative);
        assert_eq!(coefficient, 2_000_000_000_000_000);
        assert_eq!(exponent, -9);
    }
}
