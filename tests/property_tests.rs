//! Property-based tests for the numeric parsers and core combinators
//!
//! Integer parsers must accept exactly the values that fit their width,
//! and the structural combinators must hold their cursor guarantees on
//! arbitrary input.

use proptest::prelude::*;
use textcomb::number::to_unsigned;
use textcomb::prelude::*;

proptest! {
    #[test]
    fn uint8_accepts_every_value(value: u8) {
        prop_assert_eq!(parse(&uint8(), &value.to_string()), Ok(value));
    }

    #[test]
    fn uint16_accepts_every_value(value: u16) {
        prop_assert_eq!(parse(&uint16(), &value.to_string()), Ok(value));
    }

    #[test]
    fn uint32_accepts_every_value(value: u32) {
        prop_assert_eq!(parse(&uint32(), &value.to_string()), Ok(value));
    }

    #[test]
    fn uint64_accepts_every_value(value: u64) {
        prop_assert_eq!(parse(&uint64(), &value.to_string()), Ok(value));
    }

    #[test]
    fn int64_accepts_every_value(value: i64) {
        prop_assert_eq!(parse(&int64(), &value.to_string()), Ok(value));
    }

    #[test]
    fn int8_accepts_every_value(value: i8) {
        prop_assert_eq!(parse(&int8(), &value.to_string()), Ok(value));
    }

    #[test]
    fn uint16_rejects_values_past_max(excess in 1u32..1_000_000) {
        let text = (u32::from(u16::MAX) + excess).to_string();
        prop_assert_eq!(parse(&uint16(), &text), Err(ParseError::new("uint16")));
    }

    #[test]
    fn uint64_rejects_values_past_max(excess in 1u128..u128::from(u64::MAX)) {
        let text = (u128::from(u64::MAX) + excess).to_string();
        prop_assert_eq!(parse(&uint64(), &text), Err(ParseError::new("uint64")));
    }

    #[test]
    fn int32_rejects_values_past_bounds(excess in 1i64..1_000_000) {
        let above = (i64::from(i32::MAX) + excess).to_string();
        let below = (i64::from(i32::MIN) - excess).to_string();
        prop_assert_eq!(parse(&int32(), &above), Err(ParseError::new("int32")));
        prop_assert_eq!(parse(&int32(), &below), Err(ParseError::new("int32")));
    }

    #[test]
    fn leading_zeros_do_not_change_value(value: u32, zeros in 0usize..20) {
        let text = format!("{}{}", "0".repeat(zeros), value);
        prop_assert_eq!(to_unsigned::<u32>(&text), Some(value));
    }

    #[test]
    fn digit_span_is_left_after_overflow(excess in 1u32..1000, tail in "[a-z]{0,5}") {
        let text = format!("{}{}", u32::from(u8::MAX) + excess, tail);
        let failure = uint8().parse(TextCursor::new(&text)).unwrap_err();
        prop_assert_eq!(failure.label(), "uint8");
        prop_assert_eq!(failure.cursor.remaining(), tail.as_str());
    }

    #[test]
    fn scan_never_fails(text in ".*") {
        let scanner = scan(0usize, |count, ch| (ch != '\n').then_some(count + 1));
        let (scanned, cursor) = scanner.parse(TextCursor::new(&text)).unwrap();
        prop_assert!(text.starts_with(scanned));
        prop_assert_eq!(scanned.len() + cursor.remaining().len(), text.len());
    }

    #[test]
    fn or_retries_from_the_start(word in "[a-z]{1,8}") {
        // The left branch consumes the whole word and then requires a '!'
        let shouted = take_while1(|ch: char| ch.is_ascii_lowercase()).then_skip(char('!'));
        let plain = take_while1(|ch: char| ch.is_ascii_lowercase());
        prop_assert_eq!(parse(&shouted.or(plain), &word), Ok(word.as_str()));
    }

    #[test]
    fn failed_char_leaves_cursor_in_place(text in "[0-9][a-z]*") {
        let failure = char('x').parse(TextCursor::new(&text)).unwrap_err();
        prop_assert_eq!(failure.cursor.position(), 0);
    }

    #[test]
    fn take_while_and_take_till_partition_input(text in "[a-z ]*") {
        let (word, cursor) = take_till_char(' ').parse(TextCursor::new(&text)).unwrap();
        let (rest, _) = take_text().parse(cursor).unwrap();
        prop_assert_eq!(format!("{word}{rest}"), text.clone());
        prop_assert!(!word.contains(' '));
    }
}

#[test]
fn empty_and_sign_only_inputs_fail() {
    for input in ["", "+", "-"] {
        assert!(parse(&uint64(), input).is_err());
        assert!(parse(&int64(), input).is_err());
        assert_eq!(to_unsigned::<u64>(input), None);
    }
}
