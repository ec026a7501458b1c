use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};
use std::fmt;

/// Parser combinator that feeds the value of one parser into a function
/// choosing the next parser
///
/// The continuation only runs when the first parser succeeds. A failure is
/// passed outward unchanged, including the cursor it reached.
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<P, F> fmt::Debug for Bind<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bind")
            .field("parser", &self.parser)
            .field("continuation", &"<function>")
            .finish()
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, continuation)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::{any_char, char};
    use crate::error::ParseError;
    use crate::parse;
    use crate::pure::{fail, succeed};
    use crate::string::take;
    use std::cell::Cell;

    #[test]
    fn test_bind_feeds_value() {
        // The first char says how many more chars to take
        let parser = any_char().bind(|ch| take(ch.to_digit(10).unwrap_or(0) as usize, "take"));

        assert_eq!(parse(&parser, "3abcd"), Ok("abc"));
    }

    #[test]
    fn test_bind_continues_from_advanced_cursor() {
        let parser = char('a').bind(|_| char('b'));

        let (value, cursor) = parser.parse(TextCursor::new("abc")).unwrap();
        assert_eq!(value, 'b');
        assert_eq!(cursor.remaining(), "c");
    }

    #[test]
    fn test_bind_short_circuits() {
        let calls = Cell::new(0);
        let parser = char('a').bind(|ch| {
            calls.set(calls.get() + 1);
            succeed(ch)
        });

        assert_eq!(parse(&parser, "xyz"), Err(ParseError::new("char")));
        assert_eq!(calls.get(), 0);

        assert_eq!(parse(&parser, "abc"), Ok('a'));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bind_propagates_continuation_failure_cursor() {
        let parser = char('a').bind(|_| fail::<char>("after a"));

        let failure = parser.parse(TextCursor::new("ab")).unwrap_err();
        assert_eq!(failure.label(), "after a");
        // The failure reports how far the chain got
        assert_eq!(failure.cursor.position(), 1);
    }

    #[test]
    fn test_function_syntax() {
        let parser = bind(char('x'), |_| succeed(7));
        assert_eq!(parse(&parser, "x"), Ok(7));
    }
}
