//! Fixed-width unsigned byte identifiers (component C4).
//!
//! Grounded on the per-width `Hash128`/`Hash160`/`Hash256` types
//! (`core/binarycodec/types/hash128.rs`, `hash160.rs`, `hash256.rs`) and
//! their shared `Hash` trait (`hash.rs`): one struct per width, a shared
//! trait carrying the fixed length and buffer access. This generalizes that
//! shape with the richer domain API (hex/bytes/json codecs, zero/validity
//! checks) component C4 needs.

mod uint128;
mod uint160;
mod uint256;

pub use uint128::UInt128;
pub use uint160::UInt160;
pub use uint256::UInt256;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{CodecError, CoreResult};

/// Shared behaviour of every fixed-width identifier type.
pub trait FixedBytes: Sized + Clone + PartialEq {
    /// Width of the identifier, in bytes.
    const LENGTH: usize;

    fn from_bytes(bytes: &[u8]) -> CoreResult<Self>;

    fn as_bytes(&self) -> &[u8];

    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_hex(hex_str: &str) -> CoreResult<Self> {
        let bytes = hex::decode(hex_str).map_err(CodecError::from)?;
        Self::from_bytes(&bytes)
    }

    fn to_hex(&self) -> String {
        hex::encode_upper(self.as_bytes())
    }

    fn zero() -> Self {
        Self::from_bytes(&alloc::vec![0u8; Self::LENGTH]).expect("zero buffer is always valid")
    }

    fn is_zero(&self) -> bool {
        self.as_bytes().iter().all(|byte| *byte == 0)
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Parse either form accepted at a JSON boundary. The default only
    /// recognizes hex; [`UInt160`] additionally recognizes base-58.
    fn from_json(value: &str) -> CoreResult<Self> {
        Self::from_hex(value)
    }

    fn to_json(&self) -> String {
        self.to_hex()
    }

    fn is_valid(candidate: &str) -> bool {
        Self::from_json(candidate).is_ok()
    }
}
