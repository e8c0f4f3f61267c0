use proptest::prelude::*;
use small_radix::{
    convert, convert_unchecked, parse_to_decimal, render_from_decimal, validate_numeral,
    ConvertError, MAX_RADIX, MIN_RADIX,
};

fn arb_radix() -> impl Strategy<Value = u16> {
    MIN_RADIX..=MAX_RADIX
}

fn strip_leading_zeros(numeral: &str) -> String {
    let trimmed = numeral.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

proptest! {
    #[test]
    fn value_round_trips_through_every_radix(value in any::<u64>(), radix in arb_radix()) {
        let rendered = render_from_decimal(value, radix).unwrap();
        prop_assert_eq!(parse_to_decimal(&rendered, radix), Ok(value));
        prop_assert!(!rendered.starts_with('0') || rendered == "0");
    }

    #[test]
    fn numeral_round_trips_without_leading_zeros(
        zeros in 0usize..5,
        value in any::<u64>(),
        radix in arb_radix(),
    ) {
        let rendered = render_from_decimal(value, radix).unwrap();
        let numeral = format!("{}{}", "0".repeat(zeros), rendered);
        let decoded = parse_to_decimal(&numeral, radix).unwrap();
        prop_assert_eq!(
            render_from_decimal(decoded, radix).unwrap(),
            strip_leading_zeros(&numeral)
        );
    }

    #[test]
    fn checked_and_unchecked_agree_on_valid_input(
        value in any::<u64>(),
        from in arb_radix(),
        to in arb_radix(),
    ) {
        let numeral = render_from_decimal(value, from).unwrap().to_lowercase();
        prop_assert!(validate_numeral(&numeral, from));
        prop_assert_eq!(convert_unchecked(&numeral, from, to), convert(&numeral, from, to));
    }

    #[test]
    fn out_of_range_radix_is_always_range_error(
        numeral in "[0-9A-Za-z!#]{0,8}",
        bad in prop_oneof![0u16..MIN_RADIX, (MAX_RADIX + 1)..=u16::MAX],
        good in arb_radix(),
    ) {
        prop_assert_eq!(convert(&numeral, bad, good), Err(ConvertError::Range));
        prop_assert_eq!(convert(&numeral, good, bad), Err(ConvertError::Range));
    }

    #[test]
    fn digit_at_or_above_radix_is_format_error(radix in MIN_RADIX..MAX_RADIX) {
        let illegal = render_from_decimal(u64::from(radix), MAX_RADIX).unwrap();
        prop_assert_eq!(parse_to_decimal(&illegal, radix), Err(ConvertError::Format));
    }
}

#[test]
fn every_digit_decodes_to_its_position() {
    for value in 0..36u64 {
        let digit = render_from_decimal(value, 36).unwrap();
        assert_eq!(digit.len(), 1);
        assert_eq!(parse_to_decimal(&digit, 36), Ok(value));
        assert_eq!(parse_to_decimal(&digit.to_lowercase(), 36), Ok(value));
    }
}
