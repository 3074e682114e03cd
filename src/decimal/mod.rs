//! Arbitrary-precision signed decimal engine (component C1).
//!
//! [`Decimal`] is the exact `(sign, coefficient, exponent)` representation
//! shared by [`crate::value::NativeValue`] and [`crate::value::IssuedValue`].
//! Arithmetic is performed with the `bigdecimal` crate's arbitrary-precision
//! `BigDecimal` as the working engine, then re-canonicalized so the
//! coefficient always has exactly 16 decimal digits. The canonicalization
//! loop below is grounded on the mantissa-adjustment loop in
//! `_serialize_issued_currency_value` from a sibling XRPL-flavored codebase:
//! shift the coefficient up while short, shift it down (truncating) while
//! long, adjusting the exponent in lockstep.

use alloc::format;
use alloc::string::{String, ToString};
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::constants::{MAX_IOU_EXPONENT, MAX_MANTISSA, MIN_IOU_EXPONENT, MIN_MANTISSA, ZERO_EXPONENT};
use crate::error::{CoreResult, ValueError};

/// Rounding strategy for [`Decimal::round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero.
    HalfUp,
    /// Truncate toward zero.
    Down,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    Nan,
    Zero,
    Value {
        negative: bool,
        /// Always in `[MIN_MANTISSA, MAX_MANTISSA]`.
        coefficient: u64,
        exponent: i32,
    },
}

/// An exact decimal value: `sign * coefficient * 10^exponent`, or NaN.
///
/// Non-zero values are canonicalized so `coefficient` has exactly 16 decimal
/// digits; zero is canonicalized to a fixed sentinel exponent. See
/// `SPEC_FULL.md` §4.1 for the canonicalization and rounding rules this type
/// must uphold.
#[derive(Debug, Clone)]
pub struct Decimal {
    repr: Repr,
}

impl Decimal {
    /// The distinguished "not a number" value. Propagates through every
    /// arithmetic operation without panicking.
    pub fn nan() -> Self {
        Decimal { repr: Repr::Nan }
    }

    /// The canonical zero value.
    pub fn zero() -> Self {
        Decimal { repr: Repr::Zero }
    }

    /// The canonical value `1`.
    pub fn one() -> Self {
        Decimal::from_parts(false, 1, 0).expect("1 is always in canonical range")
    }

    /// Construct a canonical value from an explicit sign/coefficient/exponent
    /// triple, re-basing the coefficient into 16 significant digits.
    pub fn from_parts(negative: bool, coefficient: u64, exponent: i32) -> CoreResult<Self> {
        if coefficient == 0 {
            return Ok(Decimal::zero());
        }
        canonicalize(BigInt::from(coefficient), -(exponent as i64), negative)
    }

    /// Parse a plain decimal string (e.g. `"100.40"`, `"-25.2"`, `"5"`).
    pub fn parse(value: &str) -> CoreResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueError::InvalidNumber(value.to_string()).into());
        }
        let parsed = BigDecimal::from_str(trimmed)
            .map_err(|_| ValueError::InvalidNumber(value.to_string()))?;
        Self::from_bigdecimal(&parsed)
    }

    fn from_bigdecimal(value: &BigDecimal) -> CoreResult<Self> {
        if value.is_zero() {
            return Ok(Decimal::zero());
        }
        let negative = value.is_negative();
        let (digits, scale) = value.abs().as_bigint_and_exponent();
        canonicalize(digits, scale, negative)
    }

    fn to_bigdecimal(&self) -> Option<BigDecimal> {
        match &self.repr {
            Repr::Nan => None,
            Repr::Zero => Some(BigDecimal::from(0)),
            Repr::Value {
                negative,
                coefficient,
                exponent,
            } => {
                let mut digits = BigInt::from(*coefficient);
                if *negative {
                    digits = -digits;
                }
                Some(BigDecimal::new(digits, -(*exponent as i64)))
            }
        }
    }

    /// True if this value is the NaN sentinel.
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::Nan)
    }

    /// True if this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Zero)
    }

    /// True if this value is negative (NaN and zero are never negative).
    pub fn is_negative(&self) -> bool {
        matches!(self.repr, Repr::Value { negative: true, .. })
    }

    /// The canonical exponent, or `None` for NaN.
    pub fn exponent(&self) -> Option<i32> {
        match &self.repr {
            Repr::Nan => None,
            Repr::Zero => Some(ZERO_EXPONENT),
            Repr::Value { exponent, .. } => Some(*exponent),
        }
    }

    /// The canonical 16-digit coefficient (0 for zero), or `None` for NaN.
    pub fn coefficient(&self) -> Option<u64> {
        match &self.repr {
            Repr::Nan => None,
            Repr::Zero => Some(0),
            Repr::Value { coefficient, .. } => Some(*coefficient),
        }
    }

    /// Structural equality: same sign, coefficient and exponent. NaN is
    /// never equal to anything, including another NaN.
    pub fn equals(&self, other: &Decimal) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.repr == other.repr
    }

    /// Three-way comparison; `None` if either operand is NaN.
    pub fn compare(&self, other: &Decimal) -> Option<Ordering> {
        let a = self.to_bigdecimal()?;
        let b = other.to_bigdecimal()?;
        Some(a.cmp(&b))
    }

    /// Negate this value. NaN and zero are fixed points.
    pub fn negate(&self) -> Self {
        match &self.repr {
            Repr::Nan => Decimal::nan(),
            Repr::Zero => Decimal::zero(),
            Repr::Value {
                negative,
                coefficient,
                exponent,
            } => Decimal {
                repr: Repr::Value {
                    negative: !negative,
                    coefficient: *coefficient,
                    exponent: *exponent,
                },
            },
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        match &self.repr {
            Repr::Nan => Decimal::nan(),
            Repr::Zero => Decimal::zero(),
            Repr::Value {
                coefficient,
                exponent,
                ..
            } => Decimal {
                repr: Repr::Value {
                    negative: false,
                    coefficient: *coefficient,
                    exponent: *exponent,
                },
            },
        }
    }

    /// `1 / self`. Zero and NaN both yield NaN.
    pub fn invert(&self) -> CoreResult<Self> {
        if self.is_nan() || self.is_zero() {
            return Ok(Decimal::nan());
        }
        Decimal::one().divide(self)
    }

    /// `self + other`.
    pub fn add(&self, other: &Decimal) -> CoreResult<Self> {
        self.binary_op(other, |a, b| a + b)
    }

    /// `self - other`.
    pub fn subtract(&self, other: &Decimal) -> CoreResult<Self> {
        self.binary_op(other, |a, b| a - b)
    }

    /// `self * other`.
    pub fn multiply(&self, other: &Decimal) -> CoreResult<Self> {
        self.binary_op(other, |a, b| a * b)
    }

    /// `self / other`. Division by zero yields NaN rather than failing.
    pub fn divide(&self, other: &Decimal) -> CoreResult<Self> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        if other.is_zero() {
            return Ok(Decimal::nan());
        }
        if self.is_zero() {
            return Ok(Decimal::zero());
        }
        let a = self.to_bigdecimal().expect("checked not NaN");
        let b = other.to_bigdecimal().expect("checked not NaN");
        // bigdecimal's Div resolves to its default context precision (far
        // more than our 16 significant digits); canonicalize then performs
        // the actual round-down-toward-zero truncation to 16 digits.
        let quotient = a / b;
        Decimal::from_bigdecimal(&quotient)
    }

    fn binary_op(
        &self,
        other: &Decimal,
        op: impl FnOnce(BigDecimal, BigDecimal) -> BigDecimal,
    ) -> CoreResult<Self> {
        if self.is_nan() || other.is_nan() {
            return Ok(Decimal::nan());
        }
        let a = self.to_bigdecimal().expect("checked not NaN");
        let b = other.to_bigdecimal().expect("checked not NaN");
        Decimal::from_bigdecimal(&op(a, b))
    }

    /// Round to `digits` fractional digits using the given rounding mode.
    /// Unlike canonicalization, this rounds the *displayed* value rather
    /// than re-basing the 16-digit coefficient.
    pub fn round(&self, digits: u32, mode: RoundingMode) -> CoreResult<Self> {
        if self.is_nan() {
            return Ok(Decimal::nan());
        }
        let value = self.to_bigdecimal().expect("checked not NaN");
        let bigdecimal_mode = match mode {
            RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::Down => bigdecimal::RoundingMode::Down,
        };
        let rounded = value.with_scale_round(digits as i64, bigdecimal_mode);
        Decimal::from_bigdecimal(&rounded)
    }

    /// Render with a fixed number of fractional digits, no rounding mode
    /// choice (half-up, matching typical "toFixed" semantics).
    pub fn to_fixed(&self, digits: u32) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        let value = self
            .to_bigdecimal()
            .expect("checked not NaN")
            .with_scale_round(digits as i64, bigdecimal::RoundingMode::HalfUp);
        format!("{value}")
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.to_bigdecimal() {
            Some(value) => write!(f, "{}", value.normalized()),
            None => write!(f, "NaN"),
        }
    }
}

/// Re-base `digits * 10^-scale` into the canonical 16-digit coefficient
/// form, clamping underflow to zero and rejecting overflow.
fn canonicalize(digits: BigInt, scale: i64, negative: bool) -> CoreResult<Decimal> {
    if digits.is_zero() {
        return Ok(Decimal::zero());
    }

    let ten = BigInt::from(10);
    let min_mantissa = BigInt::from(MIN_MANTISSA);
    let max_mantissa = BigInt::from(MAX_MANTISSA);
    let mut coefficient = digits;
    let mut exponent: i32 = (-scale) as i32;

    while coefficient < min_mantissa && exponent > MIN_IOU_EXPONENT {
        coefficient *= &ten;
        exponent -= 1;
    }

    while coefficient > max_mantissa {
        if exponent >= MAX_IOU_EXPONENT {
            return Err(ValueError::Overflow.into());
        }
        coefficient /= &ten;
        exponent += 1;
    }

    if exponent < MIN_IOU_EXPONENT || coefficient < min_mantissa {
        // Underflow clamps to zero rather than failing.
        return Ok(Decimal::zero());
    }
    if exponent > MAX_IOU_EXPONENT {
        return Err(ValueError::Overflow.into());
    }

    let coefficient: u64 = coefficient
        .to_string()
        .parse()
        .expect("coefficient is bounded to 16 digits");

    Ok(Decimal {
        repr: Repr::Value {
            negative,
            coefficient,
            exponent,
        },
    })
}
