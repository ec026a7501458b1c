use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};

// Run `parser` until it fails or stops making progress, starting from `cursor`
fn repeat<'code, P>(
    parser: &P,
    mut cursor: TextCursor<'code>,
    results: &mut Vec<P::Output>,
) -> TextCursor<'code>
where
    P: Parser<'code>,
{
    // A failed attempt is abandoned and the cursor from before it is kept
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        results.push(value);
        if next_cursor == cursor {
            break;
        }
        cursor = next_cursor;
    }
    cursor
}

/// Parser combinator that matches zero or more occurrences of the given parser
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
#[derive(Debug, Clone)]
pub struct AtLeastOne<P> {
    parser: P,
}

impl<P> AtLeastOne<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOne { parser }
    }
}

impl<'code, P> Parser<'code> for AtLeastOne<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        // First parse must succeed
        let (first, next_cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];

        let cursor = if next_cursor == cursor {
            next_cursor
        } else {
            repeat(&self.parser, next_cursor, &mut results)
        };
        Ok((results, cursor))
    }
}

/// Convenience function to create an AtLeastOne parser
pub fn some<'code, P>(parser: P) -> AtLeastOne<P>
where
    P: Parser<'code>,
{
    AtLeastOne::new(parser)
}
