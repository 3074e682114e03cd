//! Tagged-union amount type (component C6): either a native (drops) amount
//! or an issued-currency amount, with shared arithmetic and comparison.
//!
//! The tagged-union shape is grounded directly on
//! `models/amount/mod.rs` (`#[serde(untagged)] enum Amount`) and its
//! siblings `issued_currency_amount.rs` / `xrp_amount.rs`; this module
//! generalizes that enum to carry exact [`NativeValue`]/[`IssuedValue`]
//! payloads instead of opaque strings, and adds the arithmetic, comparison
//! and ratio/product operations that transport-layer model does not need.

mod json;

pub use json::JsonAmount;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::constants::{DROPS_PER_NATIVE_UNIT, NATIVE_CURRENCY_CODE};
use crate::currency::Currency;
use crate::decimal::Decimal;
use crate::error::{CoreError, CoreResult};
use crate::uint::{FixedBytes, UInt160};
use crate::value::{IssuedValue, NativeValue};

#[derive(Debug, Clone, PartialEq)]
enum AmountValue {
    Native(NativeValue),
    Issued(IssuedValue),
}

/// Options accepted by [`Amount::ratio_human`] / [`Amount::product_human`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioOptions {
    pub reference_date: Option<i64>,
}

/// An amount of the native asset or of an issued currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    value: AmountValue,
    currency: Currency,
    issuer: UInt160,
}

impl Amount {
    /// Construct a native amount from an integer drops string.
    pub fn native(drops: &str) -> CoreResult<Self> {
        Ok(Amount {
            value: AmountValue::Native(NativeValue::from_drops(drops)?),
            currency: Currency::Native,
            issuer: UInt160::native(),
        })
    }

    /// Construct an issued amount from a decimal value string, a currency,
    /// and an issuer (defaulting to the `ACCOUNT_ONE` sentinel if issuer
    /// tracking is not meaningful for the caller).
    pub fn issued(value: &str, currency: Currency, issuer: UInt160) -> CoreResult<Self> {
        if currency.is_native() {
            return Err(CoreError::InvalidArgument(
                "issued amounts may not use the native currency".to_string(),
            ));
        }
        Ok(Amount {
            value: AmountValue::Issued(IssuedValue::parse(value)?),
            currency,
            issuer,
        })
    }

    /// Construct directly from a numeric value string and an explicit
    /// currency/issuer pair, choosing the native or issued representation
    /// based on `currency.is_native()`.
    pub fn from_number(value: &str, currency: Currency, issuer: UInt160) -> CoreResult<Self> {
        if currency.is_native() {
            Self::native(value)
        } else {
            Self::issued(value, currency, issuer)
        }
    }

    /// Parse the free-text human form (component C8): `"25.2"`, `"10USD"`,
    /// `"10 USD"`, `"USD 10"`.
    pub fn from_human(input: &str) -> CoreResult<Self> {
        crate::human::from_human(input, crate::human::ParseOptions::default())
    }

    /// Parse the `"<value>/<currency>[/<issuer>]"` shorthand used by
    /// [`Amount::from_json`] for non-object string input.
    pub(crate) fn from_slash_shorthand(input: &str) -> CoreResult<Self> {
        let body = input.trim();
        let parts: Vec<&str> = body.splitn(3, '/').collect();
        match parts.as_slice() {
            [value] if looks_numeric(value) => Self::native(&to_drops_string(value)?),
            [value, code] => {
                let currency = Currency::from_human(&code.to_uppercase())?;
                if currency.is_native() {
                    Self::native(&to_drops_string(value)?)
                } else {
                    Self::issued(value, currency, UInt160::account_one())
                }
            }
            [value, code, issuer] => {
                let currency = Currency::from_human(&code.to_uppercase())?;
                let issuer = UInt160::from_json(issuer)?;
                Self::issued(value, currency, issuer)
            }
            _ => Err(CoreError::InvalidArgument(input.to_string())),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self.value, AmountValue::Native(_))
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn issuer(&self) -> &UInt160 {
        &self.issuer
    }

    pub fn is_zero(&self) -> bool {
        match &self.value {
            AmountValue::Native(v) => v.is_zero(),
            AmountValue::Issued(v) => v.is_zero(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match &self.value {
            AmountValue::Native(v) => v.is_negative(),
            AmountValue::Issued(v) => v.is_negative(),
        }
    }

    /// True if this amount is in a valid (non-NaN) state.
    pub fn is_valid(&self) -> bool {
        match &self.value {
            AmountValue::Native(_) => true,
            AmountValue::Issued(v) => !v.is_nan(),
        }
    }

    fn comparable(&self, other: &Amount) -> bool {
        matches!(
            (&self.value, &other.value),
            (AmountValue::Native(_), AmountValue::Native(_))
                | (AmountValue::Issued(_), AmountValue::Issued(_))
        )
    }

    /// Dispatches a binary operation to the matching same-variant pair. An
    /// incomparable pair (native vs. issued) is not an error: it yields an
    /// invalid (NaN) issued amount, matching [`Amount::ratio_human`]'s
    /// "invalid in, invalid out" propagation.
    fn dispatch(
        &self,
        other: &Amount,
        native_op: impl FnOnce(&NativeValue, &NativeValue) -> CoreResult<NativeValue>,
        issued_op: impl FnOnce(&IssuedValue, &IssuedValue) -> CoreResult<IssuedValue>,
    ) -> CoreResult<Amount> {
        if !self.comparable(other) {
            return Ok(Amount {
                value: AmountValue::Issued(IssuedValue::nan()),
                currency: self.currency.clone(),
                issuer: self.issuer,
            });
        }
        match (&self.value, &other.value) {
            (AmountValue::Native(a), AmountValue::Native(b)) => Ok(Amount {
                value: AmountValue::Native(native_op(a, b)?),
                currency: self.currency.clone(),
                issuer: self.issuer,
            }),
            (AmountValue::Issued(a), AmountValue::Issued(b)) => Ok(Amount {
                value: AmountValue::Issued(issued_op(a, b)?),
                currency: self.currency.clone(),
                issuer: self.issuer,
            }),
            _ => unreachable!("comparable() guarantees matching variants"),
        }
    }

    pub fn add(&self, other: &Amount) -> CoreResult<Self> {
        self.dispatch(other, NativeValue::add, IssuedValue::add)
    }

    pub fn subtract(&self, other: &Amount) -> CoreResult<Self> {
        self.dispatch(other, NativeValue::subtract, IssuedValue::subtract)
    }

    pub fn multiply(&self, other: &Amount) -> CoreResult<Self> {
        self.dispatch(other, NativeValue::multiply, IssuedValue::multiply)
    }

    pub fn divide(&self, other: &Amount) -> CoreResult<Self> {
        self.dispatch(other, NativeValue::divide, IssuedValue::divide)
    }

    pub fn negate(&self) -> Self {
        let value = match &self.value {
            AmountValue::Native(v) => AmountValue::Native(v.negate()),
            AmountValue::Issued(v) => AmountValue::Issued(v.negate()),
        };
        Amount {
            value,
            currency: self.currency.clone(),
            issuer: self.issuer,
        }
    }

    pub fn abs(&self) -> Self {
        let value = match &self.value {
            AmountValue::Native(v) => AmountValue::Native(v.abs()),
            AmountValue::Issued(v) => AmountValue::Issued(v.abs()),
        };
        Amount {
            value,
            currency: self.currency.clone(),
            issuer: self.issuer,
        }
    }

    pub fn invert(&self) -> CoreResult<Self> {
        match &self.value {
            AmountValue::Native(_) => Err(CoreError::NotComparable),
            AmountValue::Issued(v) => Ok(Amount {
                value: AmountValue::Issued(v.invert()?),
                currency: self.currency.clone(),
                issuer: self.issuer,
            }),
        }
    }

    /// `-1`/`0`/`+1`, or `None` if the operands are not comparable or either
    /// is invalid.
    pub fn compare_to(&self, other: &Amount) -> Option<Ordering> {
        if !self.comparable(other) {
            return None;
        }
        match (&self.value, &other.value) {
            (AmountValue::Native(a), AmountValue::Native(b)) => a.compare(b),
            (AmountValue::Issued(a), AmountValue::Issued(b)) => a.compare(b),
            _ => None,
        }
    }

    fn interest_factor(currency: &Currency, reference_date: Option<i64>) -> f64 {
        match reference_date {
            Some(date) if currency.has_interest() => currency.get_interest_at(date),
            _ => 1.0,
        }
    }

    /// `self / denominator`, with unit and interest adjustments:
    /// - either side invalid or a zero denominator yields an invalid amount.
    /// - interest applies to the denominator only.
    /// - when the denominator is native, the numerator is scaled by 10^6
    ///   first to compensate for the drops/units mismatch.
    /// Inherits this amount's currency and issuer.
    pub fn ratio_human(&self, denominator: &Amount, opts: RatioOptions) -> CoreResult<Self> {
        if !self.is_valid() || !denominator.is_valid() || denominator.is_zero() {
            return Ok(Amount {
                value: AmountValue::Issued(IssuedValue::nan()),
                currency: self.currency.clone(),
                issuer: self.issuer,
            });
        }
        let numerator = self.as_issued()?;
        let mut denom = denominator.as_issued()?;
        let factor = Self::interest_factor(&denominator.currency, opts.reference_date);
        if factor != 1.0 {
            denom = apply_factor(&denom, 1.0 / factor)?;
        }
        let scaled_numerator = if denominator.is_native() {
            numerator.multiply(&scale_value()?)?
        } else {
            numerator
        };
        Ok(Amount {
            value: AmountValue::Issued(scaled_numerator.divide(&denom)?),
            currency: self.currency.clone(),
            issuer: self.issuer,
        })
    }

    /// `self * factor`; if `factor` is native, the product is divided by
    /// 10^6 afterward. Interest applies to `factor` only.
    pub fn product_human(&self, factor: &Amount, opts: RatioOptions) -> CoreResult<Self> {
        if !self.is_valid() || !factor.is_valid() {
            return Ok(Amount {
                value: AmountValue::Issued(IssuedValue::nan()),
                currency: self.currency.clone(),
                issuer: self.issuer,
            });
        }
        let base = self.as_issued()?;
        let mut multiplier = factor.as_issued()?;
        let interest = Self::interest_factor(&factor.currency, opts.reference_date);
        if interest != 1.0 {
            multiplier = apply_factor(&multiplier, interest)?;
        }
        let mut product = base.multiply(&multiplier)?;
        if factor.is_native() {
            product = product.divide(&scale_value()?)?;
        }
        Ok(Amount {
            value: AmountValue::Issued(product),
            currency: self.currency.clone(),
            issuer: self.issuer,
        })
    }

    fn as_issued(&self) -> CoreResult<IssuedValue> {
        match &self.value {
            AmountValue::Issued(v) => Ok(v.clone()),
            AmountValue::Native(v) => IssuedValue::parse(&v.to_drops()),
        }
    }

    /// The numeric magnitude in human units (XRP for native, the issued
    /// value as-is), optionally advanced to its future value at
    /// `reference_date`. Used by [`crate::human::to_human`].
    pub(crate) fn numeric_decimal(&self, reference_date: Option<i64>) -> CoreResult<Decimal> {
        match &self.value {
            AmountValue::Native(v) => {
                let divisor = Decimal::from_parts(false, DROPS_PER_NATIVE_UNIT, 0)?;
                v.decimal().divide(&divisor)
            }
            AmountValue::Issued(v) => {
                let mut decimal = v.decimal().clone();
                if let Some(date) = reference_date {
                    if self.currency.has_interest() {
                        let factor = self.currency.get_interest_at(date);
                        let multiplier = Decimal::parse(&alloc::format!("{factor}"))?;
                        decimal = decimal.multiply(&multiplier)?;
                    }
                }
                Ok(decimal)
            }
        }
    }

    /// Wire-form drops string. Used by [`crate::human::to_text`].
    pub(crate) fn native_drops_text(&self) -> CoreResult<String> {
        match &self.value {
            AmountValue::Native(v) => Ok(v.to_drops()),
            AmountValue::Issued(_) => {
                Err(CoreError::InvalidArgument("not a native amount".to_string()))
            }
        }
    }

    /// `(negative, coefficient, exponent)` of the canonical issued value.
    /// Used by [`crate::human::to_text`].
    pub(crate) fn issued_parts(&self) -> CoreResult<(bool, u64, i32)> {
        match &self.value {
            AmountValue::Issued(v) => {
                let coefficient = v
                    .coefficient()
                    .ok_or_else(|| CoreError::InvalidArgument("NaN".to_string()))?;
                let exponent = v
                    .exponent()
                    .ok_or_else(|| CoreError::InvalidArgument("NaN".to_string()))?;
                Ok((v.is_negative(), coefficient, exponent))
            }
            AmountValue::Native(_) => {
                Err(CoreError::InvalidArgument("not an issued amount".to_string()))
            }
        }
    }
}

fn scale_value() -> CoreResult<IssuedValue> {
    IssuedValue::parse(&DROPS_PER_NATIVE_UNIT.to_string())
}

fn apply_factor(value: &IssuedValue, factor: f64) -> CoreResult<IssuedValue> {
    let scaled = IssuedValue::parse(&alloc::format!("{factor}"))?;
    value.multiply(&scaled)
}

fn looks_numeric(token: &str) -> bool {
    let trimmed = token.strip_prefix('-').unwrap_or(token);
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn to_drops_string(xrp: &str) -> CoreResult<String> {
    Ok(NativeValue::from_units(xrp)?.to_drops())
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.value {
            AmountValue::Native(v) => write!(f, "{v} {NATIVE_CURRENCY_CODE}"),
            AmountValue::Issued(v) => write!(f, "{v} {}", self.currency.to_human()),
        }
    }
}

/// Coercion into an [`Amount`], so arithmetic call sites can accept either
/// an already-built amount or its JSON shorthand without the caller parsing
/// first.
pub trait TryIntoAmount {
    fn try_into_amount(self) -> CoreResult<Amount>;
}

impl TryIntoAmount for Amount {
    fn try_into_amount(self) -> CoreResult<Amount> {
        Ok(self)
    }
}

impl TryIntoAmount for &Amount {
    fn try_into_amount(self) -> CoreResult<Amount> {
        Ok(self.clone())
    }
}

impl TryIntoAmount for &str {
    fn try_into_amount(self) -> CoreResult<Amount> {
        Amount::from_json(self)
    }
}
