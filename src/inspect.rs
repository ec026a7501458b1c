use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};
use std::fmt;

/// Parser combinator that shows each successful value to a callback
///
/// The outcome of the inner parser is returned untouched. The callback is
/// never called on failure, which makes it useful for tracing and for tests
/// that need to observe whether a parser ran.
pub struct Inspect<P, F> {
    parser: P,
    callback: F,
}

impl<P, F> Inspect<P, F> {
    pub fn new(parser: P, callback: F) -> Self {
        Inspect { parser, callback }
    }
}

impl<P, F> fmt::Debug for Inspect<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect")
            .field("parser", &self.parser)
            .field("callback", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for Inspect<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output),
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.callback)(&value);
        Ok((value, cursor))
    }
}

/// Convenience function to create an Inspect parser
pub fn inspect<'code, P, F>(parser: P, callback: F) -> Inspect<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output),
{
    Inspect::new(parser, callback)
}

/// Extension trait to add .inspect() method support for parsers
pub trait InspectExt<'code>: Parser<'code> + Sized {
    fn inspect<F>(self, callback: F) -> Inspect<Self, F>
    where
        F: Fn(&Self::Output),
    {
        Inspect::new(self, callback)
    }
}

/// Implement InspectExt for all parsers
impl<'code, P> InspectExt<'code> for P where P: Parser<'code> {}
