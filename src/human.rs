//! Human-readable amount I/O (component C8): the free-text parser and
//! configurable formatter layered on top of [`crate::amount::Amount`].
//!
//! Grounded on `utils/xrpl_conversion.rs` (drops/XRP unit
//! conversion) and on the mantissa-windowing text form documented in
//! `other_examples/7418867f_589labs-xrpl-rust__src-core-types-amount.rs.rs`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::currency::Currency;
use crate::error::{CoreError, CoreResult};
use crate::uint::UInt160;
use crate::value::NativeValue;

/// Options accepted by [`from_human`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Treat the parsed value as a future value; divide by the currency's
    /// interest factor at this date to get the present value.
    pub reference_date: Option<i64>,
}

fn is_numeric_token(token: &str) -> bool {
    let trimmed = token.strip_prefix('-').unwrap_or(token);
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_hex160(token: &str) -> bool {
    token.len() == 40 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a free-text human amount: `"25.2"` (native), `"10USD"`,
/// `"10 USD"`, `"USD 10"`, or `"10 <hex160>"`.
pub fn from_human(input: &str, opts: ParseOptions) -> CoreResult<Amount> {
    let tokens: Vec<&str> = input.split(' ').filter(|t| !t.is_empty()).collect();

    let (value, currency) = match tokens.as_slice() {
        [single] if is_numeric_token(single) => (single.to_string(), Currency::Native),
        [single] => split_value_and_code(single)?,
        [a, b] if is_numeric_token(a) && is_hex160(b) => {
            (a.to_string(), Currency::from_hex(b)?)
        }
        [a, b] if is_numeric_token(a) => (a.to_string(), Currency::from_human(&b.to_uppercase())?),
        [a, b] if is_numeric_token(b) => (b.to_string(), Currency::from_human(&a.to_uppercase())?),
        _ => return Err(CoreError::InvalidArgument(input.to_string())),
    };

    let amount = if currency.is_native() {
        Amount::native(&NativeValue::from_units(&value)?.to_drops())?
    } else {
        Amount::issued(&value, currency.clone(), UInt160::account_one())?
    };

    match opts.reference_date {
        Some(date) if currency.has_interest() => {
            let factor = currency.get_interest_at(date);
            let divisor_amount = Amount::issued(
                &alloc::format!("{factor}"),
                currency.clone(),
                UInt160::account_one(),
            )?;
            amount.divide(&divisor_amount)
        }
        _ => Ok(amount),
    }
}

fn split_value_and_code(token: &str) -> CoreResult<(String, Currency)> {
    if token.len() < 4 {
        return Err(CoreError::InvalidArgument(token.to_string()));
    }
    let split_at = token.len() - 3;
    let (value, code) = token.split_at(split_at);
    if !is_numeric_token(value) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoreError::InvalidArgument(token.to_string()));
    }
    Ok((value.to_string(), Currency::from_human(&code.to_uppercase())?))
}

/// Options accepted by [`to_human`].
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub precision: Option<u32>,
    pub min_precision: Option<u32>,
    pub skip_empty_fraction: bool,
    pub max_sig_digits: Option<u32>,
    pub group_sep: Option<char>,
    pub group_width: usize,
    pub signed: bool,
    pub reference_date: Option<i64>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            precision: None,
            min_precision: None,
            skip_empty_fraction: false,
            max_sig_digits: None,
            group_sep: Some(','),
            group_width: 3,
            signed: true,
            reference_date: None,
        }
    }
}

/// Render an amount's numeric magnitude (without a currency suffix) per
/// `opts`.
pub fn to_human(amount: &Amount, opts: &FormatOptions) -> CoreResult<String> {
    let decimal = amount.numeric_decimal(opts.reference_date)?;
    let negative = decimal.is_negative();

    let rendered = match opts.precision {
        Some(digits) => decimal
            .round(digits, crate::decimal::RoundingMode::HalfUp)?
            .to_string(),
        None => decimal.to_string(),
    };

    let (mut integer_part, mut fraction_part) = match rendered.trim_start_matches('-').split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (rendered.trim_start_matches('-').to_string(), String::new()),
    };

    if let Some(min) = opts.min_precision {
        while (fraction_part.len() as u32) < min {
            fraction_part.push('0');
        }
    }

    if let Some(max_sig) = opts.max_sig_digits {
        let leading_zero_integer = integer_part == "0";
        let integer_digits = if leading_zero_integer {
            0
        } else {
            integer_part.len() as u32
        };
        let skip = if leading_zero_integer {
            fraction_part
                .chars()
                .take_while(|c| *c == '0')
                .count() as u32
        } else {
            0
        };
        let budget = max_sig.saturating_sub(integer_digits).saturating_add(skip);
        if (fraction_part.len() as u32) > budget {
            fraction_part.truncate(budget as usize);
        }
    }

    if opts.skip_empty_fraction && fraction_part.chars().all(|c| c == '0') {
        fraction_part.clear();
    }

    if let Some(sep) = opts.group_sep {
        integer_part = group_digits(&integer_part, sep, opts.group_width);
    }

    let mut result = String::new();
    if negative && opts.signed {
        result.push('-');
    }
    result.push_str(&integer_part);
    if !fraction_part.is_empty() {
        result.push('.');
        result.push_str(&fraction_part);
    }
    Ok(result)
}

fn group_digits(digits: &str, sep: char, width: usize) -> String {
    if width == 0 {
        return digits.to_string();
    }
    let bytes: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(bytes.len() + bytes.len() / width);
    for (i, c) in bytes.iter().enumerate() {
        let remaining = bytes.len() - i;
        if i != 0 && remaining % width == 0 {
            grouped.push(sep);
        }
        grouped.push(*c);
    }
    grouped
}

// The mantissa's 16 digits are placed in a zero-padded window with the
// decimal point fixed after column `INTEGER_WIDTH`. The digit carrying
// place value `10^exponent` (the mantissa's last digit) must land at
// column `INTEGER_WIDTH - 1 - exponent`, so the mantissa's first digit
// starts at `INTEGER_WIDTH - 16 - exponent`.
const INTEGER_WIDTH: i32 = 43;
const FRACTION_WIDTH: usize = 30;

/// Render the wire text form: integer drops for native amounts, and for
/// issued amounts either `<mantissa>e<exponent>` or a fixed-point decimal
/// assembled by positioning the 16-digit mantissa in a padded window.
pub fn to_text(amount: &Amount) -> CoreResult<String> {
    if amount.is_native() {
        return Ok(amount.native_drops_text()?);
    }
    let (negative, coefficient, exponent) = amount.issued_parts()?;
    let sign = if negative { "-" } else { "" };

    if (!(-25..=-4).contains(&exponent)) && exponent != 0 {
        return Ok(alloc::format!("{sign}{coefficient}e{exponent}"));
    }

    let start = INTEGER_WIDTH - 16 - exponent;
    if start < 0 || (start as usize) + 16 > (INTEGER_WIDTH as usize + FRACTION_WIDTH) {
        return Ok(alloc::format!("{sign}{coefficient}e{exponent}"));
    }

    let mut window = alloc::vec![b'0'; INTEGER_WIDTH as usize + FRACTION_WIDTH];
    let mantissa = alloc::format!("{coefficient:016}");
    let start = start as usize;
    window[start..start + 16].copy_from_slice(mantissa.as_bytes());

    let integer_chars = &window[..INTEGER_WIDTH as usize];
    let fraction_chars = &window[INTEGER_WIDTH as usize..];

    let mut integer_str = core::str::from_utf8(integer_chars)
        .expect("ascii digits")
        .trim_start_matches('0')
        .to_string();
    if integer_str.is_empty() {
        integer_str.push('0');
    }
    let fraction_str = core::str::from_utf8(fraction_chars)
        .expect("ascii digits")
        .trim_end_matches('0');

    if fraction_str.is_empty() {
        Ok(alloc::format!("{sign}{integer_str}"))
    } else {
        Ok(alloc::format!("{sign}{integer_str}.{fraction_str}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_token_native() {
        let amount = from_human("25.2", ParseOptions::default()).unwrap();
        assert!(amount.is_native());
    }

    #[test]
    fn test_attached_code() {
        let amount = from_human("10USD", ParseOptions::default()).unwrap();
        assert!(!amount.is_native());
        assert_eq!(amount.currency().to_human(), "USD");
    }

    #[test]
    fn test_two_token_value_code() {
        let amount = from_human("10 USD", ParseOptions::default()).unwrap();
        assert!(!amount.is_native());
    }

    #[test]
    fn test_two_token_code_value() {
        let amount = from_human("USD 10", ParseOptions::default()).unwrap();
        assert!(!amount.is_native());
    }

    #[test]
    fn test_to_human_default() {
        let amount = Amount::issued(
            "1234.5",
            Currency::from_human("USD").unwrap(),
            UInt160::account_one(),
        )
        .unwrap();
        let rendered = to_human(&amount, &FormatOptions::default()).unwrap();
        assert_eq!(rendered, "1,234.5");
    }

    #[test]
    fn test_to_human_precision_rounds() {
        let amount = Amount::issued(
            "1.2345",
            Currency::from_human("USD").unwrap(),
            UInt160::account_one(),
        )
        .unwrap();
        let opts = FormatOptions {
            precision: Some(2),
            ..FormatOptions::default()
        };
        let rendered = to_human(&amount, &opts).unwrap();
        assert_eq!(rendered, "1.23");
    }

    #[test]
    fn test_to_human_skip_empty_fraction() {
        let amount = Amount::native("1000000000").unwrap();
        let opts = FormatOptions {
            skip_empty_fraction: true,
            ..FormatOptions::default()
        };
        let rendered = to_human(&amount, &opts).unwrap();
        assert_eq!(rendered, "1,000");
    }

    #[test]
    fn test_to_text_native_is_drops() {
        let amount = Amount::native("1000000").unwrap();
        assert_eq!(to_text(&amount).unwrap(), "1000000");
    }

    #[test]
    fn test_to_text_issued_fixed_point() {
        let amount = Amount::issued(
            "1.5",
            Currency::from_human("USD").unwrap(),
            UInt160::account_one(),
        )
        .unwrap();
        let rendered = to_text(&amount).unwrap();
        assert_eq!(rendered, "1.5");
    }

    #[test]
    fn test_to_text_issued_e_notation_for_small_exponent() {
        let amount = Amount::issued(
            "1e-50",
            Currency::from_human("USD").unwrap(),
            UInt160::account_one(),
        )
        .unwrap();
        let rendered = to_text(&amount).unwrap();
        assert!(rendered.contains('e'));
    }
}
