use super::convert::{float_prefix_len, to_double};
use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{ParseStep, Parser};

/// Parser that matches the longest float literal at the cursor and returns it as an `f64`
///
/// A trailing `.` or exponent marker without digits is not part of the
/// literal, so `"1.x"` parses as `1.0` and leaves `".x"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleParser;

impl<'code> Parser<'code> for DoubleParser {
    type Output = f64;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let Some(length) = float_prefix_len(cursor.remaining()) else {
            return Err(Failure::new("double", cursor));
        };
        let end = cursor.forward(length);

        match to_double(cursor.slice_to(&end)) {
            Some(value) => Ok((value, end)),
            None => Err(Failure::new("double", end)),
        }
    }
}

pub fn double() -> DoubleParser {
    DoubleParser
}
