//! Bidirectional digit table: `0-9A-Z` <-> `0..=35`.

use crate::utils::error::ConvertError;
use std::sync::LazyLock;

pub const DIGIT_COUNT: usize = 36;

const SYMBOLS: &[u8; DIGIT_COUNT] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

struct DigitTable {
    decode: [Option<u8>; 128],
    encode: [char; DIGIT_COUNT],
}

static TABLE: LazyLock<DigitTable> = LazyLock::new(|| {
    let mut decode = [None; 128];
    let mut encode = ['0'; DIGIT_COUNT];

    for (value, &symbol) in SYMBOLS.iter().enumerate() {
        let value = value as u8;
        decode[symbol as usize] = Some(value);
        // 小寫字母視同大寫
        decode[symbol.to_ascii_lowercase() as usize] = Some(value);
        encode[value as usize] = symbol as char;
    }

    DigitTable { decode, encode }
});

/// Decodes one digit symbol, case-insensitively.
///
/// Fails with [`ConvertError::Range`] for anything outside `0-9A-Za-z`. Callers
/// facing user input translate that into [`ConvertError::Format`].
pub fn digit_to_value(c: char) -> Result<u8, ConvertError> {
    let index = c as u32;
    if index >= 128 {
        return Err(ConvertError::Range);
    }
    TABLE.decode[index as usize].ok_or(ConvertError::Range)
}

/// Encodes a value in `0..=35` as its uppercase digit symbol.
pub fn value_to_digit(value: u8) -> Result<char, ConvertError> {
    TABLE
        .encode
        .get(value as usize)
        .copied()
        .ok_or(ConvertError::Range)
}
