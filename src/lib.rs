#![no_std]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std as alloc;

pub mod amount;
pub mod base58;
pub mod constants;
pub mod currency;
pub mod decimal;
pub mod error;
pub mod human;
pub mod macros;
pub mod quality;
pub mod seed;
pub mod uint;
pub mod value;

pub use amount::{Amount, TryIntoAmount};
pub use currency::Currency;
pub use decimal::Decimal;
pub use error::{CodecError, CoreError, CoreResult, CurrencyError, ValueError};
pub use quality::{parse_quality, Quality, QualityOptions};
pub use seed::Seed;
pub use uint::{FixedBytes, UInt128, UInt160, UInt256};
pub use value::{IssuedValue, NativeValue};
