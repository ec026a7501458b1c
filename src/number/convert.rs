//! Overflow-safe conversions from decimal text
//!
//! Every check happens before the operation it guards, so accumulation
//! never wraps. Any rejection yields `None`.

use super::bounded::{Bounded, SignedInt, UnsignedInt};

fn decimal_digit(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

// Accumulate upward toward T::MAX
fn accumulate_positive<T: Bounded>(digits: &str) -> Option<T> {
    if digits.is_empty() {
        return None;
    }

    let ten = T::from_digit(10);
    let max_div_10 = T::MAX / ten;
    let mut value = T::from_digit(0);

    for byte in digits.bytes() {
        let digit = T::from_digit(decimal_digit(byte)?);
        if value > max_div_10 {
            return None;
        }
        value = value * ten;
        if value > T::MAX - digit {
            return None;
        }
        value = value + digit;
    }
    Some(value)
}

// Accumulate downward toward T::MIN, so the most negative value is reachable
fn accumulate_negative<T: Bounded>(digits: &str) -> Option<T> {
    if digits.is_empty() {
        return None;
    }

    let ten = T::from_digit(10);
    let min_div_10 = T::MIN / ten;
    let mut value = T::from_digit(0);

    for byte in digits.bytes() {
        let digit = T::from_digit(decimal_digit(byte)?);
        if value < min_div_10 {
            return None;
        }
        value = value * ten;
        if value < T::MIN + digit {
            return None;
        }
        value = value - digit;
    }
    Some(value)
}

/// Convert text matching `[0-9]+` into an unsigned integer that fits `T`
pub fn to_unsigned<T: UnsignedInt>(text: &str) -> Option<T> {
    accumulate_positive(text)
}

/// Convert text matching `[+-]?[0-9]+` into a signed integer that fits `T`
pub fn to_signed<T: SignedInt>(text: &str) -> Option<T> {
    match text.as_bytes().first() {
        Some(b'-') => accumulate_negative(&text[1..]),
        Some(b'+') => accumulate_positive(&text[1..]),
        _ => accumulate_positive(text),
    }
}

/// Byte length of the longest prefix of `text` that is a float literal
///
/// Literal shape: `[+-]? digit+ ('.' digit+)? ([eE] [+-]? digit+)?`.
/// A `.` or exponent marker not followed by digits is left unconsumed.
pub(crate) fn float_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer = count_digits(&bytes[end..]);
    if integer == 0 {
        return None;
    }
    end += integer;

    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = count_digits(&bytes[exponent..]);
        if digits > 0 {
            end = exponent + digits;
        }
    }

    Some(end)
}

/// Convert a whole float literal into an `f64`
///
/// Stray characters, double signs, an empty mantissa or a result too large
/// to be finite all give `None`.
pub fn to_double(text: &str) -> Option<f64> {
    if float_prefix_len(text)? != text.len() {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Method-call access to the decimal conversions
///
/// ```
/// use textcomb::number::DecimalStr;
///
/// assert_eq!("255".to_unsigned::<u8>(), Some(255));
/// assert_eq!("-128".to_signed::<i8>(), Some(-128));
/// assert_eq!("12e-3".to_double(), Some(0.012));
/// assert_eq!("1 2".to_double(), None);
/// ```
pub trait DecimalStr {
    fn to_unsigned<T: UnsignedInt>(&self) -> Option<T>;
    fn to_signed<T: SignedInt>(&self) -> Option<T>;
    fn to_double(&self) -> Option<f64>;
}

impl DecimalStr for str {
    fn to_unsigned<T: UnsignedInt>(&self) -> Option<T> {
        to_unsigned(self)
    }

    fn to_signed<T: SignedInt>(&self) -> Option<T> {
        to_signed(self)
    }

    fn to_double(&self) -> Option<f64> {
        to_double(self)
    }
}
