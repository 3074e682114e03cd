//! Currency codes, including interest-bearing and demurraging codes
//! (component C5).
//!
//! Grounded on `core/binarycodec/types/currency.rs`
//! (`_is_iso_code`/`_is_hex`/`_iso_to_bytes`, `ISO_CURRENCY_REGEX` /
//! `HEX_CURRENCY_REGEX` from `constants.rs`, and the native-currency
//! sentinel constants). The interest/demurrage half-life math reuses
//! `utils/time_conversion.rs`'s `RIPPLE_EPOCH` constant and its `chrono`
//! dependency.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use regex::Regex;

use crate::constants::{
    CURRENCY_CODE_LENGTH, HEX_CURRENCY_REGEX, ISO_CURRENCY_REGEX, NATIVE_CURRENCY_CODE,
    NATIVE_CURRENCY_HEX, NETWORK_EPOCH,
};
use crate::error::{CoreResult, CurrencyError};

const DEMURRAGE_TYPE: u8 = 0x01;

/// A currency code: the native asset, a 3-character ISO-style code, or a
/// full 160-bit code carrying an interest/demurrage schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum Currency {
    /// The native asset sentinel (all-zero 160-bit code).
    Native,
    /// A 3-character code, e.g. `"USD"`.
    Iso(String),
    /// A custom code that accrues interest (positive half-life) or
    /// demurrage (negative half-life) from `start`.
    Demurrage {
        code: String,
        /// Seconds since the network epoch at which accrual begins.
        start: i64,
        /// Half-life in seconds; positive accrues interest, negative decays.
        halflife_seconds: f64,
    },
}

fn is_iso_code(value: &str) -> bool {
    Regex::new(ISO_CURRENCY_REGEX)
        .expect("static regex is valid")
        .is_match(value)
}

fn is_hex_code(value: &str) -> bool {
    Regex::new(HEX_CURRENCY_REGEX)
        .expect("static regex is valid")
        .is_match(value)
}

fn iso_to_bytes(code: &str) -> CoreResult<[u8; CURRENCY_CODE_LENGTH]> {
    if !is_iso_code(code) {
        return Err(CurrencyError::InvalidIsoCode(code.to_string()).into());
    }
    let mut bytes = [0u8; CURRENCY_CODE_LENGTH];
    bytes[12..15].copy_from_slice(code.as_bytes());
    Ok(bytes)
}

fn iso_from_bytes(bytes: &[u8; CURRENCY_CODE_LENGTH]) -> Option<String> {
    if bytes[..12].iter().any(|b| *b != 0) || bytes[15..].iter().any(|b| *b != 0) {
        return None;
    }
    let candidate = core::str::from_utf8(&bytes[12..15]).ok()?;
    if is_iso_code(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}

impl Currency {
    /// Parse a currency from either a 3-letter ISO code, `"XRP"`, or a
    /// 40-character hex code.
    pub fn from_human(value: &str) -> CoreResult<Self> {
        if value == NATIVE_CURRENCY_CODE {
            return Ok(Currency::Native);
        }
        if is_iso_code(value) {
            return Ok(Currency::Iso(value.to_string()));
        }
        if is_hex_code(value) {
            return Self::from_hex(value);
        }
        Err(CurrencyError::InvalidIsoCode(value.to_string()).into())
    }

    /// Parse a currency from its raw 40-character hex form.
    pub fn from_hex(hex_code: &str) -> CoreResult<Self> {
        let bytes: Vec<u8> = hex::decode(hex_code).map_err(CurrencyError::from)?;
        if bytes.len() != CURRENCY_CODE_LENGTH {
            return Err(CurrencyError::InvalidHexCode(hex_code.to_string()).into());
        }
        let mut array = [0u8; CURRENCY_CODE_LENGTH];
        array.copy_from_slice(&bytes);
        Self::from_bytes(&array)
    }

    fn from_bytes(bytes: &[u8; CURRENCY_CODE_LENGTH]) -> CoreResult<Self> {
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Currency::Native);
        }
        if bytes[0] == DEMURRAGE_TYPE {
            let code = core::str::from_utf8(&bytes[1..4])
                .map_err(|_| CurrencyError::InvalidHexCode(hex::encode_upper(bytes)))?
                .to_string();
            let mut rate_bytes = [0u8; 8];
            rate_bytes.copy_from_slice(&bytes[4..12]);
            let halflife_seconds = f64::from_be_bytes(rate_bytes);
            let mut start_bytes = [0u8; 4];
            start_bytes.copy_from_slice(&bytes[12..16]);
            let start = u32::from_be_bytes(start_bytes) as i64;
            return Ok(Currency::Demurrage {
                code,
                start,
                halflife_seconds,
            });
        }
        if let Some(code) = iso_from_bytes(bytes) {
            return Ok(Currency::Iso(code));
        }
        Ok(Currency::Iso(hex::encode_upper(bytes)))
    }

    /// True if this is the native-asset sentinel.
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native)
    }

    /// True for any recognizable currency; hex-encoded fallbacks from
    /// `from_bytes` are always valid by construction.
    pub fn is_valid(&self) -> bool {
        match self {
            Currency::Native => true,
            Currency::Iso(code) => is_iso_code(code) || is_hex_code(code),
            Currency::Demurrage { code, .. } => code.len() == 3,
        }
    }

    /// True if this currency accrues interest or demurrage.
    pub fn has_interest(&self) -> bool {
        matches!(self, Currency::Demurrage { .. })
    }

    /// The accrual factor at `reference_date` (seconds since the network
    /// epoch). Non-demurrage currencies always return `1.0`.
    pub fn get_interest_at(&self, reference_date: i64) -> f64 {
        match self {
            Currency::Demurrage {
                start,
                halflife_seconds,
                ..
            } => {
                if *halflife_seconds == 0.0 {
                    return 1.0;
                }
                let elapsed = (reference_date - start) as f64;
                libm_exp(elapsed * core::f64::consts::LN_2 / halflife_seconds)
            }
            _ => 1.0,
        }
    }

    /// Convert a wall-clock UNIX timestamp (seconds since 1970) to the
    /// network epoch used by [`Currency::get_interest_at`].
    pub fn unix_to_network_epoch(unix_seconds: i64) -> i64 {
        unix_seconds - NETWORK_EPOCH
    }

    pub fn to_hex(&self) -> String {
        match self {
            Currency::Native => NATIVE_CURRENCY_HEX.to_string(),
            Currency::Iso(code) => match iso_to_bytes(code) {
                Ok(bytes) => hex::encode_upper(bytes),
                Err(_) => code.clone(),
            },
            Currency::Demurrage {
                code,
                start,
                halflife_seconds,
            } => {
                let mut bytes = [0u8; CURRENCY_CODE_LENGTH];
                bytes[0] = DEMURRAGE_TYPE;
                bytes[1..4].copy_from_slice(code.as_bytes());
                bytes[4..12].copy_from_slice(&halflife_seconds.to_be_bytes());
                bytes[12..16].copy_from_slice(&(*start as u32).to_be_bytes());
                hex::encode_upper(bytes)
            }
        }
    }

    /// The short human form: `"XRP"`, the 3-letter ISO code, or (for a
    /// demurrage code) its embedded code, falling back to hex.
    pub fn to_human(&self) -> String {
        match self {
            Currency::Native => NATIVE_CURRENCY_CODE.to_string(),
            Currency::Iso(code) => code.clone(),
            Currency::Demurrage { code, .. } => code.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        self.to_human()
    }
}

impl ToString for Currency {
    fn to_string(&self) -> String {
        self.to_human()
    }
}

/// `e^x` without relying on `std`'s `f64::exp` (unavailable under `no_std`).
fn libm_exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.exp()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::exp(x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_native_round_trip() {
        let currency = Currency::Native;
        assert_eq!(currency.to_hex(), NATIVE_CURRENCY_HEX);
        assert_eq!(Currency::from_hex(NATIVE_CURRENCY_HEX).unwrap(), currency);
    }

    #[test]
    fn test_iso_round_trip() {
        let currency = Currency::from_human("USD").unwrap();
        let hex = currency.to_hex();
        assert_eq!(Currency::from_hex(&hex).unwrap(), currency);
        assert_eq!(currency.to_human(), "USD");
    }

    #[test]
    fn test_non_native_hex_without_iso_pattern_stays_hex() {
        let hex = "015841551A748AD2C1F76FF6ECB0CCCD000000A";
        let currency = Currency::from_hex(hex).unwrap();
        assert!(currency.has_interest());
    }

    #[test]
    fn test_demurrage_round_trip_and_decay() {
        let currency = Currency::Demurrage {
            code: "XAU".to_string(),
            start: 0,
            halflife_seconds: -1.0,
        };
        let hex = currency.to_hex();
        let decoded = Currency::from_hex(&hex).unwrap();
        assert_eq!(decoded, currency);
        assert!(decoded.has_interest());
        let factor_after_one_halflife = decoded.get_interest_at(1);
        assert!((factor_after_one_halflife - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_interest_growth() {
        let currency = Currency::Demurrage {
            code: "XAU".to_string(),
            start: 0,
            halflife_seconds: 1.0,
        };
        let factor_after_one_halflife = currency.get_interest_at(1);
        assert!((factor_after_one_halflife - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_demurrage_interest_is_one() {
        assert_eq!(Currency::Native.get_interest_at(1_000), 1.0);
    }

    #[test]
    fn test_invalid_iso_code_rejected() {
        assert!(Currency::from_human("us").is_err());
    }
}
