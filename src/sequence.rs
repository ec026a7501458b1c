use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};

/// Runs two parsers in order and keeps the value of the second
///
/// Either failure stops the sequence and is returned as is.
#[derive(Debug, Clone)]
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Runs two parsers in order and keeps the value of the first
///
/// Either failure stops the sequence and is returned as is.
#[derive(Debug, Clone)]
pub struct ThenSkip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenSkip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenSkip { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for ThenSkip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (value, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(parser1, parser2)
}

/// Convenience function to create a ThenSkip parser
pub fn then_skip<'code, P1, P2>(parser1: P1, parser2: P2) -> ThenSkip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    ThenSkip::new(parser1, parser2)
}

/// Extension trait to add .then() and .then_skip() method support for parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    /// Sequence with `other`, discarding this parser's value
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }

    /// Sequence with `other`, discarding the value of `other`
    fn then_skip<P>(self, other: P) -> ThenSkip<Self, P>
    where
        P: Parser<'code>,
    {
        ThenSkip::new(self, other)
    }
}

/// Implement SequenceExt for all parsers
impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::{char, skip_char};
    use crate::error::ParseError;
    use crate::number::uint8;
    use crate::parse;

    #[test]
    fn test_then_keeps_right() {
        let parser = char('#').then(uint8());

        let (value, cursor) = parser.parse(TextCursor::new("#12;")).unwrap();
        assert_eq!(value, 12);
        assert_eq!(cursor.value(), Some(';'));
    }

    #[test]
    fn test_then_skip_keeps_left() {
        let parser = uint8().then_skip(skip_char(';'));

        let (value, cursor) = parser.parse(TextCursor::new("12;rest")).unwrap();
        assert_eq!(value, 12);
        assert_eq!(cursor.remaining(), "rest");
    }

    #[test]
    fn test_then_first_fails() {
        let parser = char('#').then(uint8());
        assert_eq!(parse(&parser, "12"), Err(ParseError::new("char")));
    }

    #[test]
    fn test_then_second_fails() {
        let parser = char('#').then(uint8());
        assert_eq!(parse(&parser, "#300"), Err(ParseError::new("uint8")));
    }

    #[test]
    fn test_then_skip_second_fails() {
        let parser = uint8().then_skip(skip_char(';'));

        let failure = parser.parse(TextCursor::new("12,")).unwrap_err();
        assert_eq!(failure.label(), "skipChar");
        assert_eq!(failure.cursor.remaining(), ",");
    }

    #[test]
    fn test_function_syntax() {
        assert_eq!(parse(&then(char('a'), char('b')), "ab"), Ok('b'));
        assert_eq!(parse(&then_skip(char('a'), char('b')), "ab"), Ok('a'));
    }
}
