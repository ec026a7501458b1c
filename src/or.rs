use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};
use tracing::trace;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the cursor `Or` was given, no
/// matter how far the first parser got before failing. When both fail only
/// the second failure is reported.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(failure) => {
                trace!(
                    from = cursor.position(),
                    reached = failure.cursor.position(),
                    label = failure.label(),
                    "alternative backtracking"
                );
                self.parser2.parse(cursor)
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::char;
    use crate::error::ParseError;
    use crate::parse;
    use crate::sequence::SequenceExt;
    use crate::string::string;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(char('a'), char('b'));

        let (ch, cursor) = parser.parse(TextCursor::new("abc")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.value(), Some('b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(char('a'), char('b'));

        let (ch, cursor) = parser.parse(TextCursor::new("bcd")).unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.value(), Some('c'));
    }

    #[test]
    fn test_or_both_fail_reports_last() {
        let parser = string("ab").or(string("cd").then_skip(char('!')));

        assert_eq!(parse(&parser, "xyz"), Err(ParseError::new("string")));
        assert_eq!(parse(&parser, "cd?"), Err(ParseError::new("char")));
    }

    #[test]
    fn test_or_backtracks_after_partial_consumption() {
        // Left branch consumes "ab" before failing on 'c'
        let left = string("ab").then(string("c"));
        let right = string("abd");
        let parser = left.or(right);

        let (value, cursor) = parser.parse(TextCursor::new("abdx")).unwrap();
        assert_eq!(value, "abd");
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_or_method_chain() {
        let parser = char('a').or(char('b')).or(char('c'));

        let (ch, cursor) = parser.parse(TextCursor::new("c")).unwrap();
        assert_eq!(ch, 'c');
        assert!(cursor.eos());
    }
}
