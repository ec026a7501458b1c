use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{ParseStep, Parser};
use std::borrow::Cow;

/// Parser that always succeeds with a copy of its value without consuming input
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T> Parser<'code> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Parser that always fails with its message without consuming input
#[derive(Debug, Clone)]
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        Err(Failure::new(self.message.clone(), cursor))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::parse;

    #[test]
    fn test_succeed_does_not_consume() {
        let cursor = TextCursor::new("hello");
        let parser = succeed(42);

        let (value, remaining) = parser.parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(remaining.value(), Some('h'));
    }

    #[test]
    fn test_succeed_on_empty_input() {
        assert_eq!(parse(&succeed("done"), ""), Ok("done"));
    }

    #[test]
    fn test_succeed_is_reusable() {
        let parser = succeed(String::from("x"));
        assert_eq!(parse(&parser, "a"), Ok(String::from("x")));
        assert_eq!(parse(&parser, "b"), Ok(String::from("x")));
    }

    #[test]
    fn test_fail_carries_message() {
        let parser = fail::<u8>("nope");
        assert_eq!(parse(&parser, "anything"), Err(ParseError::new("nope")));
    }

    #[test]
    fn test_fail_does_not_consume() {
        let cursor = TextCursor::new("abc").next();
        let failure = fail::<()>("stop").parse(cursor).unwrap_err();
        assert_eq!(failure.cursor, cursor);
    }
}
