//! Collection of shared constants for the amount, currency and identifier
//! codecs.

use alloc::string::String;
use alloc::string::ToString;
use strum_macros::EnumIter;

/// Regular expression for determining ISO currency codes.
pub const ISO_CURRENCY_REGEX: &str = r"^[A-Z0-9]{3}$";
/// Regular expression for determining hex currency codes.
pub const HEX_CURRENCY_REGEX: &str = r"^[A-F0-9]{40}$";

/// Length, in bytes, of a 160-bit currency/account identifier.
pub const CURRENCY_CODE_LENGTH: usize = 20;
/// The hex currency code reserved for the native asset.
pub const NATIVE_CURRENCY_HEX: &str = "0000000000000000000000000000000000000000";
/// The human currency code for the native asset.
pub const NATIVE_CURRENCY_CODE: &str = "XRP";

/// Drops in one unit of the native asset.
pub const DROPS_PER_NATIVE_UNIT: u64 = 1_000_000;
/// Maximum representable magnitude of the native asset, in whole units (10^11).
pub const MAX_NATIVE_UNITS: u64 = 100_000_000_000;
/// Maximum representable magnitude of the native asset, in drops.
pub const MAX_NATIVE_DROPS: u64 = MAX_NATIVE_UNITS * DROPS_PER_NATIVE_UNIT;

/// Minimum canonical coefficient for a non-zero issued value (16 digits).
pub const MIN_MANTISSA: u64 = 1_000_000_000_000_000;
/// Maximum canonical coefficient for a non-zero issued value (16 digits).
pub const MAX_MANTISSA: u64 = 9_999_999_999_999_999;
/// Minimum canonical exponent for a non-zero issued value.
pub const MIN_IOU_EXPONENT: i32 = -96;
/// Maximum canonical exponent for a non-zero issued value.
pub const MAX_IOU_EXPONENT: i32 = 80;
/// Canonical exponent assigned to zero.
pub const ZERO_EXPONENT: i32 = -100;

/// Bias applied to the exponent byte inside a packed quality value.
pub const QUALITY_EXPONENT_BIAS: i32 = 100;

/// The "Ripple Epoch" of 2000-01-01T00:00:00 UTC, in seconds since the UNIX epoch.
pub const NETWORK_EPOCH: i64 = 946_684_800;

/// Represents the supported key-derivation algorithms for a [`crate::seed::Seed`].
///
/// Only the seed envelope (version prefix, payload length, checksum) is in
/// scope for this crate; the key-derivation algorithms themselves are an
/// external collaborator's concern.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter)]
pub enum CryptoAlgorithm {
    Ed25519,
    Secp256k1,
}

impl ToString for CryptoAlgorithm {
    /// Return the String representation of an algorithm.
    fn to_string(&self) -> String {
        match *self {
            CryptoAlgorithm::Ed25519 => "ed25519".to_string(),
            CryptoAlgorithm::Secp256k1 => "secp256k1".to_string(),
        }
    }
}
