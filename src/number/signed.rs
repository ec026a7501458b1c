use super::bounded::SignedInt;
use super::convert::to_signed;
use crate::ascii::is_digit;
use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{ParseStep, Parser};
use crate::string::take_while1;
use std::marker::PhantomData;

/// Parser that matches an optionally signed run of ASCII digits and returns it as a `T`
#[derive(Debug, Clone, Copy)]
pub struct SignedParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for SignedParser<T>
where
    T: SignedInt,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let after_sign = match cursor.value() {
            Some('+' | '-') => cursor.next(),
            _ => cursor,
        };
        let (_, end) = take_while1(is_digit).parse(after_sign)?;

        match to_signed::<T>(cursor.slice_to(&end)) {
            Some(value) => Ok((value, end)),
            None => Err(Failure::new(T::LABEL, end)),
        }
    }
}

pub fn signed<T: SignedInt>() -> SignedParser<T> {
    SignedParser {
        _phantom: PhantomData,
    }
}

/// Native-width signed parser
pub fn int() -> SignedParser<isize> {
    signed()
}

pub fn int8() -> SignedParser<i8> {
    signed()
}

pub fn int16() -> SignedParser<i16> {
    signed()
}

pub fn int32() -> SignedParser<i32> {
    signed()
}

pub fn int64() -> SignedParser<i64> {
    signed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::parse;

    #[test]
    fn test_positive_integer() {
        let (value, cursor) = int32().parse(TextCursor::new("123abc")).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.value(), Some('a'));
    }

    #[test]
    fn test_negative_integer() {
        let (value, cursor) = int32().parse(TextCursor::new("-456xyz")).unwrap();
        assert_eq!(value, -456);
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_integer_with_plus() {
        let (value, cursor) = int64().parse(TextCursor::new("+789")).unwrap();
        assert_eq!(value, 789);
        assert!(cursor.eos());
    }

    #[test]
    fn test_int8_bounds() {
        assert_eq!(parse(&int8(), "-128"), Ok(i8::MIN));
        assert_eq!(parse(&int8(), "127"), Ok(i8::MAX));
        assert_eq!(parse(&int8(), "128"), Err(ParseError::new("int8")));
        assert_eq!(parse(&int8(), "-129"), Err(ParseError::new("int8")));
    }

    #[test]
    fn test_lone_sign_fails() {
        let failure = int().parse(TextCursor::new("-abc")).unwrap_err();
        assert_eq!(failure.label(), "tailWhile1");
        // The sign was consumed before the digits were missed
        assert_eq!(failure.cursor.position(), 1);

        assert!(parse(&int(), "+").is_err());
        assert!(parse(&int(), "").is_err());
    }

    #[test]
    fn test_double_sign_fails() {
        assert!(parse(&int16(), "--5").is_err());
        assert!(parse(&int16(), "+-5").is_err());
    }

    #[test]
    fn test_native_width() {
        assert_eq!(parse(&int(), &isize::MIN.to_string()), Ok(isize::MIN));
    }
}
