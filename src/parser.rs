use crate::cursor::TextCursor;
use crate::error::{Failure, ParseError};
use std::fmt;
use tracing::{debug, trace};

/// Outcome of running a parser for one step
///
/// Success carries the value and the advanced cursor. Failure carries the
/// label and the cursor the attempt reached before giving up.
pub type ParseStep<'code, T> = Result<(T, TextCursor<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
///
/// A parser is a reusable description of a cursor transition. It holds no
/// mutable state: running the same parser value any number of times, from
/// any number of threads, gives each run its own cursor and its own
/// accumulators.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output>;
}

/// Run `parser` against `text` and return only its value or its error
///
/// The final cursor is not exposed; trailing input is not an error.
///
/// ```
/// use textcomb::prelude::*;
///
/// assert_eq!(parse(&uint8(), "255"), Ok(255));
/// assert_eq!(parse(&uint8(), "256").unwrap_err().label(), "uint8");
/// ```
pub fn parse<'code, P>(parser: &P, text: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    trace!(len = text.len(), "parse");
    match parser.parse(TextCursor::new(text)) {
        Ok((value, _)) => Ok(value),
        Err(failure) => {
            debug!(
                label = failure.label(),
                position = failure.cursor.position(),
                "parse failed"
            );
            Err(failure.into_error())
        }
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, for storing parsers of different concrete types together
pub type BoxedParser<'a, 'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'a>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Parser built from a closure over the cursor
pub struct FromFn<F> {
    step: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("step", &"<function>")
            .finish()
    }
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(TextCursor<'code>) -> ParseStep<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        (self.step)(cursor)
    }
}

/// Lift a cursor-stepping closure into a parser
pub fn from_fn<'code, F, T>(step: F) -> FromFn<F>
where
    F: Fn(TextCursor<'code>) -> ParseStep<'code, T>,
{
    FromFn { step }
}
