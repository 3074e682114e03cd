use crate::error::{CodecError, CoreResult};
use crate::uint::FixedBytes;

/// A 256-bit (32-byte) fixed-width identifier (e.g. a ledger or transaction hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt256([u8; 32]);

impl FixedBytes for UInt256 {
    const LENGTH: usize = 32;

    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CodecError::UnexpectedPayloadLength {
                expected: 32,
                found: bytes.len(),
            })?;
        Ok(UInt256(array))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for UInt256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TEST_HEX: &str =
        "1000000000200000000030000000004000000000500000000060000000001234FFFF";

    #[test]
    fn test_wrong_length_rejected() {
        assert!(UInt256::from_hex(TEST_HEX).is_err());
    }

    #[test]
    fn test_from_hex_round_trip() {
        let hex = "0102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F";
        let value = UInt256::from_hex(hex).unwrap();
        assert_eq!(value.to_hex(), hex);
    }

    #[test]
    fn test_zero_is_zero() {
        assert!(UInt256::zero().is_zero());
    }
}
