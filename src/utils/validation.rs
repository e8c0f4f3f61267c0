use crate::domain::model::MAX_RADIX;
use crate::utils::error::{AppError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Z]").expect("static pattern is valid"));

static NON_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static pattern is valid"));

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AppError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&format) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!("Unsupported format. Valid formats: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 逐字過濾：只保留不符合 `rejected` 的字元，游標以輸入字元數計算
fn filter_chars(
    input: &str,
    caret: usize,
    rejected: &Regex,
    map: impl Fn(char) -> char,
) -> (String, usize) {
    let mut cleaned = String::with_capacity(input.len());
    let mut new_caret = 0;

    for (i, c) in input.chars().enumerate() {
        let c = map(c);
        let mut buf = [0u8; 4];
        if !rejected.is_match(c.encode_utf8(&mut buf)) {
            cleaned.push(c);
        }
        if i < caret {
            new_caret = cleaned.len();
        }
    }

    (cleaned, new_caret)
}

/// 模擬互動式輸入框的即時過濾：轉成大寫並移除非 `[0-9A-Z]` 字元。
///
/// Each character is uppercased on its own (ASCII only), so symbols outside
/// the digit alphabet are dropped rather than expanded. Returns the cleaned
/// text together with the caret position adjusted for the characters removed
/// in front of it.
pub fn sanitize_numeral(input: &str, caret: usize) -> (String, usize) {
    filter_chars(input, caret, &NON_DIGIT, |c| c.to_ascii_uppercase())
}

/// As-you-type filter for a radix field: keeps `[0-9]` only and clamps any
/// value above [`MAX_RADIX`] to `"36"`, moving the caret to the end.
pub fn sanitize_radix(input: &str, caret: usize) -> (String, usize) {
    let (cleaned, new_caret) = filter_chars(input, caret, &NON_DECIMAL, |c| c);
    if cleaned.is_empty() {
        return (cleaned, new_caret);
    }

    // 只剩數字，解析失敗代表超出 u16
    match cleaned.parse::<u16>() {
        Ok(value) if value <= MAX_RADIX => (cleaned, new_caret),
        _ => {
            let clamped = MAX_RADIX.to_string();
            let end = clamped.len();
            (clamped, end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./out").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("batch.default_from", 2u16, 2, 36).is_ok());
        assert!(validate_range("batch.default_from", 36u16, 2, 36).is_ok());
        assert!(validate_range("batch.default_from", 37u16, 2, 36).is_err());
        assert!(validate_range("batch.default_from", 1u16, 2, 36).is_err());
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format("output.format", "csv", &["csv", "json"]).is_ok());
        assert!(validate_output_format("output.format", "xml", &["csv", "json"]).is_err());
    }

    #[test]
    fn test_sanitize_numeral() {
        assert_eq!(sanitize_numeral("ff", 2), ("FF".to_string(), 2));
        assert_eq!(sanitize_numeral("1-0 1", 5), ("101".to_string(), 3));
        assert_eq!(sanitize_numeral("a_b", 2), ("AB".to_string(), 1));
        assert_eq!(sanitize_numeral("", 0), (String::new(), 0));
    }

    #[test]
    fn test_sanitize_numeral_does_not_expand_non_ascii() {
        assert_eq!(sanitize_numeral("ß1", 1), ("1".to_string(), 0));
        assert_eq!(sanitize_numeral("ß1", 2), ("1".to_string(), 1));
        assert_eq!(sanitize_numeral("ﬀ", 1), (String::new(), 0));
        assert_eq!(sanitize_numeral("éa", 2), ("A".to_string(), 1));
    }

    #[test]
    fn test_sanitize_radix() {
        assert_eq!(sanitize_radix("1a6", 3), ("16".to_string(), 2));
        assert_eq!(sanitize_radix("4x0", 1), ("36".to_string(), 2));
        assert_eq!(sanitize_radix("36", 2), ("36".to_string(), 2));
        assert_eq!(sanitize_radix("99999999", 3), ("36".to_string(), 2));
        assert_eq!(sanitize_radix("", 0), (String::new(), 0));
        assert_eq!(sanitize_radix("xy", 2), (String::new(), 0));
        assert_eq!(sanitize_radix("٣2", 2), ("2".to_string(), 1));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(16u16);
        let missing: Option<u16> = None;
        assert_eq!(*validate_required_field("jobs[0].from", &present).unwrap(), 16);
        assert!(validate_required_field("jobs[0].from", &missing).is_err());
    }
}
