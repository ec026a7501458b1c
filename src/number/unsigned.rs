use super::bounded::UnsignedInt;
use super::convert::to_unsigned;
use crate::ascii::is_digit;
use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{ParseStep, Parser};
use crate::string::take_while1;
use std::marker::PhantomData;
use tracing::trace;

/// Parser that matches one or more ASCII digits and returns them as a `T`
///
/// Input that does not start with a digit fails with the `take_while1`
/// label. A digit run that does not fit `T` fails with `T::LABEL`, with the
/// cursor left after the digits.
#[derive(Debug, Clone, Copy)]
pub struct UnsignedParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for UnsignedParser<T>
where
    T: UnsignedInt,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (digits, cursor) = take_while1(is_digit).parse(cursor)?;

        match to_unsigned::<T>(digits) {
            Some(value) => Ok((value, cursor)),
            None => {
                trace!(digits, label = T::LABEL, "unsigned overflow");
                Err(Failure::new(T::LABEL, cursor))
            }
        }
    }
}

pub fn unsigned<T: UnsignedInt>() -> UnsignedParser<T> {
    UnsignedParser {
        _phantom: PhantomData,
    }
}

/// Native-width unsigned parser
pub fn uint() -> UnsignedParser<usize> {
    unsigned()
}

pub fn uint8() -> UnsignedParser<u8> {
    unsigned()
}

pub fn uint16() -> UnsignedParser<u16> {
    unsigned()
}

pub fn uint32() -> UnsignedParser<u32> {
    unsigned()
}

pub fn uint64() -> UnsignedParser<u64> {
    unsigned()
}
