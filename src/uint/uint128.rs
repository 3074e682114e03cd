use crate::error::{CodecError, CoreResult};
use crate::uint::FixedBytes;

/// A 128-bit (16-byte) fixed-width identifier (e.g. seed entropy payloads).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt128([u8; 16]);

impl FixedBytes for UInt128 {
    const LENGTH: usize = 16;

    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let array: [u8; 16] = bytes
            .try_into()
            .map_err(|_| CodecError::UnexpectedPayloadLength {
                expected: 16,
                found: bytes.len(),
            })?;
        Ok(UInt128(array))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for UInt128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TEST_HEX: &str = "000102030405060708090A0B0C0D0E0F";

    #[test]
    fn test_from_hex_round_trip() {
        let value = UInt128::from_hex(TEST_HEX).unwrap();
        assert_eq!(value.to_hex(), TEST_HEX);
    }

    #[test]
    fn test_zero_is_zero() {
        assert!(UInt128::zero().is_zero());
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(UInt128::from_hex("1000").is_err());
    }
}
