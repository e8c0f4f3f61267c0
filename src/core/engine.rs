//! Radix conversion engine.
//!
//! Every operation here is pure: no shared state, no I/O, no logging. Failures
//! are returned as [`ConvertError`] and left to the caller to present.

use crate::core::digits::{digit_to_value, value_to_digit};
use crate::domain::model::Radix;
use crate::domain::ports::NumeralConverter;
use crate::utils::error::ConvertError;

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Re-renders `numeral` from radix `from` into radix `to`.
///
/// Both radices are range-checked before the numeral is looked at.
pub fn convert(numeral: &str, from: u16, to: u16) -> ConvertResult<String> {
    let from = Radix::new(from)?;
    let to = Radix::new(to)?;

    let value = parse_digits(numeral, from)?;
    render_digits(value, to)
}

/// Same as [`convert`] but trusts the numeral: no digit validation and no
/// overflow detection on the parsing side.
///
/// Only meant for input that already passed [`validate_numeral`] and is known
/// to fit in a `u64`; for such input the result equals [`convert`].
pub fn convert_unchecked(numeral: &str, from: u16, to: u16) -> ConvertResult<String> {
    let to = Radix::new(to)?;
    render_digits(parse_to_decimal_unchecked(numeral, from), to)
}

pub fn parse_to_decimal(numeral: &str, radix: u16) -> ConvertResult<u64> {
    parse_digits(numeral, Radix::new(radix)?)
}

/// Decimal text of the parsed value.
pub fn parse_to_decimal_string(numeral: &str, radix: u16) -> ConvertResult<String> {
    parse_to_decimal(numeral, radix).map(|value| value.to_string())
}

/// Wrapping accumulation without validation. Unrecognized symbols count as 0.
pub fn parse_to_decimal_unchecked(numeral: &str, radix: u16) -> u64 {
    let base = u64::from(radix);
    numeral.chars().fold(0u64, |acc, c| {
        let digit = digit_to_value(c).map_or(0, u64::from);
        acc.wrapping_mul(base).wrapping_add(digit)
    })
}

pub fn render_from_decimal(value: u64, radix: u16) -> ConvertResult<String> {
    render_digits(value, Radix::new(radix)?)
}

/// Renders a decimal literal given as text.
///
/// The literal must be a non-empty run of ASCII digits (no sign, no
/// whitespace); anything else is a format error. Literals above `u64::MAX`
/// are an overflow.
pub fn render_from_decimal_str(decimal: &str, radix: u16) -> ConvertResult<String> {
    let radix = Radix::new(radix)?;

    if decimal.is_empty() || !decimal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::Format);
    }
    // 語法已確認，剩下的失敗只可能是超出範圍
    let value = decimal
        .parse::<u64>()
        .map_err(|_| ConvertError::Overflow)?;

    render_digits(value, radix)
}

/// `true` when `numeral` is non-empty and every symbol is a digit below `radix`.
///
/// Does not range-check `radix` itself.
pub fn validate_numeral(numeral: &str, radix: u16) -> bool {
    !numeral.is_empty()
        && numeral
            .chars()
            .all(|c| matches!(digit_to_value(c), Ok(digit) if u16::from(digit) < radix))
}

fn parse_digits(numeral: &str, radix: Radix) -> ConvertResult<u64> {
    if !validate_numeral(numeral, radix.get()) {
        return Err(ConvertError::Format);
    }

    let base = u64::from(radix);
    numeral.chars().try_fold(0u64, |acc, c| {
        let digit = digit_to_value(c).map_err(|_| ConvertError::Format)?;
        acc.checked_mul(base)
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .ok_or(ConvertError::Overflow)
    })
}

fn render_digits(mut value: u64, radix: Radix) -> ConvertResult<String> {
    if value == 0 {
        return Ok("0".to_string());
    }

    let base = u64::from(radix);
    // u64::MAX in base 2 needs 64 symbols
    let mut digits = Vec::with_capacity(64);
    while value != 0 {
        digits.push(value_to_digit((value % base) as u8)?);
        value /= base;
    }

    Ok(digits.iter().rev().collect())
}

/// Validated conversion path.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedConverter;

impl NumeralConverter for CheckedConverter {
    fn convert(&self, numeral: &str, from: u16, to: u16) -> ConvertResult<String> {
        convert(numeral, from, to)
    }
}

/// Fast path for numerals that were validated upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustedConverter;

impl NumeralConverter for TrustedConverter {
    fn convert(&self, numeral: &str, from: u16, to: u16) -> ConvertResult<String> {
        convert_unchecked(numeral, from, to)
    }
}
