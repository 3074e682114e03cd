//! Crate-wide error hierarchy.
//!
//! Mirrors the shape of a host network's exception family: one leaf enum per
//! concern, composed into a single top-level error via `#[from]` conversions.

use alloc::string::String;
use thiserror_no_std::Error;

/// Result alias used throughout this crate.
pub type CoreResult<T, E = CoreError> = core::result::Result<T, E>;

/// Errors raised by the base-58 identifier codec (addresses, seeds).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("base58 checksum mismatch")]
    ChecksumMismatch,
    #[error("unrecognized version byte")]
    UnknownVersion,
    #[error("expected payload of {expected} bytes, found {found}")]
    UnexpectedPayloadLength { expected: usize, found: usize },
    #[error("base58 decode error: {0}")]
    Base58Decode(#[from] bs58::decode::Error),
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Errors raised while constructing or operating on [`crate::decimal::Decimal`],
/// [`crate::value::NativeValue`] and [`crate::value::IssuedValue`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValueError {
    #[error("value exceeds the maximum magnitude for its kind")]
    Overflow,
    #[error("value is below the minimum representable magnitude for its kind")]
    Underflow,
    #[error("value exceeds the min/max range for its kind")]
    OutOfRange,
    #[error("could not parse `{0}` as a decimal value")]
    InvalidNumber(String),
}

/// Errors raised while constructing [`crate::currency::Currency`] codes.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CurrencyError {
    #[error("`{0}` is not a valid 3-letter ISO currency code")]
    InvalidIsoCode(String),
    #[error("`{0}` is not a valid 40-character hex currency code")]
    InvalidHexCode(String),
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Top-level error for every fallible operation exposed by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("value out of range: {0}")]
    OutOfRange(String),
    #[error("operands are not comparable")]
    NotComparable,
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("value error: {0}")]
    Value(#[from] ValueError),
    #[error("currency error: {0}")]
    Currency(#[from] CurrencyError),
}

impl From<bs58::decode::Error> for CoreError {
    fn from(err: bs58::decode::Error) -> Self {
        CoreError::Codec(CodecError::from(err))
    }
}

impl From<hex::FromHexError> for CoreError {
    fn from(err: hex::FromHexError) -> Self {
        CoreError::Codec(CodecError::from(err))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
