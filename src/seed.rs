//! Seed codec (component C4 specialization): 128-bit entropy plus a
//! key-type tag, base-58 encoded with a type-dependent version prefix.
//!
//! Grounded on `core/addresscodec/codec.rs`
//! (`encode_seed`/`decode_seed`): the version prefix selects the key type,
//! and decoding tries each known prefix in turn via `CryptoAlgorithm::iter()`
//! (`strum`), using the same `skip_err!` loop.

use alloc::string::{String, ToString};
use sha2::{Digest, Sha512};
use strum::IntoEnumIterator;
use zeroize::Zeroize;

use crate::base58;
use crate::constants::CryptoAlgorithm;
use crate::error::{CodecError, CoreResult};
use crate::skip_err;

const SEED_LENGTH: usize = 16;
const ED25519_PREFIX: [u8; 3] = [0x01, 0xE1, 0x4B];
const SECP256K1_PREFIX: [u8; 1] = [0x21];

fn prefix_for(algorithm: CryptoAlgorithm) -> &'static [u8] {
    match algorithm {
        CryptoAlgorithm::Ed25519 => &ED25519_PREFIX,
        CryptoAlgorithm::Secp256k1 => &SECP256K1_PREFIX,
    }
}

/// 128 bits of key-derivation entropy tagged with the algorithm it was
/// minted for. Entropy is zeroized on drop.
pub struct Seed {
    entropy: [u8; SEED_LENGTH],
    algorithm: CryptoAlgorithm,
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.entropy.zeroize();
    }
}

impl Seed {
    /// Build a seed from explicit entropy.
    pub fn from_entropy(entropy: [u8; SEED_LENGTH], algorithm: CryptoAlgorithm) -> Self {
        Seed { entropy, algorithm }
    }

    /// Derive a seed deterministically from a passphrase: SHA-512 of the
    /// UTF-8 bytes, keeping the first 16 bytes. This is a deterministic
    /// convenience, not a cryptographic KDF (no salt, no work factor).
    pub fn from_passphrase(passphrase: &str, algorithm: CryptoAlgorithm) -> Self {
        let digest = Sha512::digest(passphrase.as_bytes());
        let mut entropy = [0u8; SEED_LENGTH];
        entropy.copy_from_slice(&digest[..SEED_LENGTH]);
        Seed { entropy, algorithm }
    }

    pub fn algorithm(&self) -> CryptoAlgorithm {
        self.algorithm
    }

    pub fn entropy(&self) -> &[u8; SEED_LENGTH] {
        &self.entropy
    }

    /// Encode as the versioned, checksummed base-58 seed string.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.entropy, prefix_for(self.algorithm))
    }

    /// Decode a base-58 seed string, trying each known key-type prefix.
    pub fn from_base58(seed: &str) -> CoreResult<Self> {
        let mut result: Option<CoreResult<alloc::vec::Vec<u8>>> = None;
        let mut algo: Option<CryptoAlgorithm> = None;
        for algorithm in CryptoAlgorithm::iter() {
            let decoded = base58::decode(seed, prefix_for(algorithm));
            result = Some(skip_err!(decoded));
            algo = Some(algorithm);
        }
        match result {
            Some(Ok(bytes)) => {
                if bytes.len() != SEED_LENGTH {
                    return Err(CodecError::UnexpectedPayloadLength {
                        expected: SEED_LENGTH,
                        found: bytes.len(),
                    }
                    .into());
                }
                let mut entropy = [0u8; SEED_LENGTH];
                entropy.copy_from_slice(&bytes);
                Ok(Seed {
                    entropy,
                    algorithm: algo.expect("set alongside result"),
                })
            }
            Some(Err(_)) | None => Err(CodecError::UnknownVersion.into()),
        }
    }

    /// Parse flow used at a JSON boundary: base-58 seed, then 32-char hex
    /// entropy, then treat the input as a passphrase.
    pub fn from_json(value: &str) -> CoreResult<Self> {
        if let Ok(seed) = Self::from_base58(value) {
            return Ok(seed);
        }
        if value.len() == 32 && value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            let bytes = hex::decode(value).map_err(CodecError::from)?;
            let mut entropy = [0u8; SEED_LENGTH];
            entropy.copy_from_slice(&bytes);
            return Ok(Seed {
                entropy,
                algorithm: CryptoAlgorithm::Secp256k1,
            });
        }
        Ok(Self::from_passphrase(value, CryptoAlgorithm::Secp256k1))
    }

    /// Serialize to the JSON boundary form: the same base-58 seed string
    /// [`Seed::to_base58`] produces.
    pub fn to_json(&self) -> String {
        self.to_base58()
    }
}

impl ToString for Seed {
    fn to_string(&self) -> String {
        self.to_base58()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_secp256k1_round_trip() {
        let entropy: [u8; 16] = [
            207, 45, 227, 120, 251, 221, 126, 46, 232, 125, 72, 109, 251, 90, 123, 255,
        ];
        let seed = Seed::from_entropy(entropy, CryptoAlgorithm::Secp256k1);
        let encoded = seed.to_base58();
        assert_eq!(encoded, "sn259rEFXrQrWyx3Q7XneWcwV6dfL");

        let decoded = Seed::from_base58(&encoded).unwrap();
        assert_eq!(decoded.entropy(), &entropy);
        assert_eq!(decoded.algorithm(), CryptoAlgorithm::Secp256k1);
    }

    #[test]
    fn test_ed25519_round_trip() {
        let entropy: [u8; 16] = [
            76, 58, 29, 33, 63, 189, 251, 20, 199, 194, 141, 96, 148, 105, 179, 65,
        ];
        let seed = Seed::from_entropy(entropy, CryptoAlgorithm::Ed25519);
        let encoded = seed.to_base58();
        assert_eq!(encoded, "sEdTM1uX8pu2do5XvTnutH6HsouMaM2");

        let decoded = Seed::from_base58(&encoded).unwrap();
        assert_eq!(decoded.entropy(), &entropy);
        assert_eq!(decoded.algorithm(), CryptoAlgorithm::Ed25519);
    }

    #[test]
    fn test_from_passphrase_is_deterministic() {
        let a = Seed::from_passphrase("hello world", CryptoAlgorithm::Secp256k1);
        let b = Seed::from_passphrase("hello world", CryptoAlgorithm::Secp256k1);
        assert_eq!(a.entropy(), b.entropy());
    }

    #[test]
    fn test_from_json_passphrase_fallback() {
        let seed = Seed::from_json("not a seed at all").unwrap();
        assert_eq!(seed.algorithm(), CryptoAlgorithm::Secp256k1);
    }

    #[test]
    fn test_from_json_hex_form() {
        let hex = "CF2DE378FBDD7E2EE87D486DFB5A7BF";
        let seed = Seed::from_json(hex).unwrap();
        assert_eq!(seed.entropy(), &hex::decode(hex).unwrap()[..]);
    }

    #[test]
    fn test_well_known_masterpassphrase_seed() {
        let seed = Seed::from_json("masterpassphrase").unwrap();
        assert_eq!(seed.to_json(), "snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
    }
}
