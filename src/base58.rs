//! Checksummed base-58 codec shared by account addresses and seeds.
//!
//! Grounded on `core/addresscodec/codec.rs`: a version/type
//! prefix is prepended to the payload, the whole buffer is base-58 encoded
//! with a trailing double-SHA-256 checksum (via `bs58`'s `with_check`), using
//! the network's custom alphabet rather than standard base-58.

use alloc::string::String;
use alloc::vec::Vec;
use bs58::Alphabet;

use crate::error::{CodecError, CoreResult};

const ALPHABET: Alphabet = *bs58::Alphabet::RIPPLE;

/// Encode `payload` prefixed by `prefix`, with a checksum.
pub fn encode(payload: &[u8], prefix: &[u8]) -> String {
    let mut buf = Vec::with_capacity(prefix.len() + payload.len());
    buf.extend_from_slice(prefix);
    buf.extend_from_slice(payload);
    bs58::encode(buf)
        .with_alphabet(&ALPHABET)
        .with_check()
        .into_string()
}

/// Decode a checksummed base-58 string, verifying it carries `prefix`, and
/// return the payload with the prefix stripped.
pub fn decode(encoded: &str, prefix: &[u8]) -> CoreResult<Vec<u8>> {
    let decoded = bs58::decode(encoded)
        .with_alphabet(&ALPHABET)
        .with_check(None)
        .into_vec()
        .map_err(CodecError::from)?;
    if decoded.len() < prefix.len() || decoded[..prefix.len()] != *prefix {
        return Err(CodecError::UnknownVersion.into());
    }
    Ok(decoded[prefix.len()..].to_vec())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let payload = [1u8; 20];
        let prefix = [0x00];
        let encoded = encode(&payload, &prefix);
        let decoded = decode(&encoded, &prefix).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_decode_rejects_wrong_prefix() {
        let payload = [1u8; 20];
        let encoded = encode(&payload, &[0x00]);
        assert!(decode(&encoded, &[0x23]).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let mut encoded = encode(&[1u8; 20], &[0x00]);
        encoded.push('x');
        assert!(decode(&encoded, &[0x00]).is_err());
    }
}
