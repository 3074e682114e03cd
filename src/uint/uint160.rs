use alloc::string::String;

use crate::base58;
use crate::error::{CodecError, CoreResult};
use crate::uint::FixedBytes;

const CLASSIC_ADDRESS_PREFIX: [u8; 1] = [0x00];

/// A 160-bit (20-byte) fixed-width identifier: an account address or a
/// currency code's raw byte buffer.
///
/// Grounded on `core/addresscodec/codec.rs`
/// (`encode_classic_address`/`decode_classic_address`), reusing
/// [`crate::base58`] with the classic-address version prefix (`0x00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt160([u8; 20]);

impl UInt160 {
    /// The all-zero sentinel for the native asset / "no account".
    pub fn native() -> Self {
        UInt160([0u8; 20])
    }

    /// The `ACCOUNT_ONE` sentinel (`rrrrrrrrrrrrrrrrrrrrBZbvji`), used as a
    /// placeholder issuer for amounts that carry none.
    pub fn account_one() -> Self {
        let mut bytes = [0u8; 20];
        bytes[19] = 1;
        UInt160(bytes)
    }

    /// True if this is the all-zero native-asset sentinel.
    pub fn is_native(&self) -> bool {
        self.is_zero()
    }

    /// Base-58 classic-address form, e.g. `"rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH"`.
    pub fn to_address(&self) -> String {
        base58::encode(&self.0, &CLASSIC_ADDRESS_PREFIX)
    }

    /// Parse a base-58 classic address.
    pub fn from_address(address: &str) -> CoreResult<Self> {
        let decoded = base58::decode(address, &CLASSIC_ADDRESS_PREFIX)?;
        Self::from_bytes(&decoded)
    }
}

impl FixedBytes for UInt160 {
    const LENGTH: usize = 20;

    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let array: [u8; 20] = bytes
            .try_into()
            .map_err(|_| CodecError::UnexpectedPayloadLength {
                expected: 20,
                found: bytes.len(),
            })?;
        Ok(UInt160(array))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Auto-detects hex (40 hex digits) vs base-58 classic-address form.
    fn from_json(value: &str) -> CoreResult<Self> {
        if value.len() == 40 && value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            Self::from_hex(value)
        } else {
            Self::from_address(value)
        }
    }
}

impl core::fmt::Display for UInt160 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_address())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_native_is_zero() {
        assert!(UInt160::native().is_native());
    }

    #[test]
    fn test_account_one_is_not_native() {
        assert!(!UInt160::account_one().is_native());
    }

    #[test]
    fn test_address_round_trip() {
        let address = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59";
        let value = UInt160::from_address(address).unwrap();
        assert_eq!(value.to_address(), address);
    }

    #[test]
    fn test_from_json_detects_hex() {
        let hex = "0000000000000000000000000000000000000000";
        // 42 chars, not a valid 40-hex-digit code; falls through to base-58
        // and fails, proving the hex branch only triggers at length 40.
        assert!(UInt160::from_json(hex).is_err());
    }

    #[test]
    fn test_from_json_hex_form() {
        let hex = "0000000000000000000000000000000000000000";
        let trimmed = &hex[..40];
        assert!(UInt160::from_json(trimmed).is_ok());
    }
}
