use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};

/// Sequential application: parse a function, then its argument, and apply one to the other
#[derive(Debug, Clone)]
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PA, F, B> Parser<'code> for Apply<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: FnOnce(PA::Output) -> B,
{
    type Output = B;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA, F, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: FnOnce(PA::Output) -> B,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers of functions
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PA, B>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'code>,
        Self::Output: FnOnce(PA::Output) -> B,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}
