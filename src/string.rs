//! Parsers that consume a run of units and return it as a slice of the input

use crate::ascii::match_prefix;
use crate::cursor::TextCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseStep, Parser};
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

// Fixed-length takes with a zero count report misuse instead of matching nothing
fn misuse<'code>(label: &str, cursor: TextCursor<'code>) -> Failure<'code> {
    debug!(parser = label, "fixed-length take built with a zero count");
    Failure {
        error: ParseError::misuse(label),
        cursor,
    }
}

/// Parser that consumes exactly `count` units
#[derive(Debug, Clone)]
pub struct Take {
    count: usize,
    label: Cow<'static, str>,
}

impl<'code> Parser<'code> for Take {
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        if self.count == 0 {
            return Err(misuse(&self.label, cursor));
        }
        match cursor.advance(self.count) {
            Some(next) => Ok((cursor.slice_to(&next), next)),
            None => Err(Failure::new(self.label.clone(), cursor)),
        }
    }
}

/// Consume exactly `count` units, failing without consuming if fewer remain
pub fn take(count: usize, label: impl Into<Cow<'static, str>>) -> Take {
    Take {
        count,
        label: label.into(),
    }
}

/// Parser that consumes `count` units only if their transformed value passes a predicate
pub struct TakeWith<T, P> {
    count: usize,
    transform: T,
    predicate: P,
    label: Cow<'static, str>,
}

impl<T, P> fmt::Debug for TakeWith<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWith")
            .field("count", &self.count)
            .field("label", &self.label)
            .finish()
    }
}

impl<'code, T, P, U> Parser<'code> for TakeWith<T, P>
where
    T: Fn(&'code str) -> U,
    P: Fn(&U) -> bool,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        if self.count == 0 {
            return Err(misuse(&self.label, cursor));
        }
        if let Some(next) = cursor.advance(self.count) {
            let value = (self.transform)(cursor.slice_to(&next));
            if (self.predicate)(&value) {
                return Ok((value, next));
            }
        }
        Err(Failure::new(self.label.clone(), cursor))
    }
}

pub fn take_with<'code, T, P, U>(
    count: usize,
    transform: T,
    predicate: P,
    label: impl Into<Cow<'static, str>>,
) -> TakeWith<T, P>
where
    T: Fn(&'code str) -> U,
    P: Fn(&U) -> bool,
{
    TakeWith {
        count,
        transform,
        predicate,
        label: label.into(),
    }
}

fn identity(text: &str) -> &str {
    text
}

/// [`take_with`] without a transform: the predicate sees the consumed slice
pub fn take_if<'code, P>(
    count: usize,
    predicate: P,
    label: impl Into<Cow<'static, str>>,
) -> TakeWith<fn(&'code str) -> &'code str, P>
where
    P: Fn(&&'code str) -> bool,
{
    take_with(count, identity as fn(&'code str) -> &'code str, predicate, label)
}

/// Parser that matches an exact literal
#[derive(Debug, Clone)]
pub struct StringParser {
    literal: Cow<'static, str>,
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        match match_prefix(&self.literal, cursor.remaining()) {
            Some(length) => {
                let next = cursor.forward(length);
                Ok((cursor.slice_to(&next), next))
            }
            None => Err(Failure::new("string", cursor)),
        }
    }
}

/// Consume `literal` if the input starts with it, case-sensitively
///
/// The empty literal always matches and consumes nothing.
pub fn string(literal: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser {
        literal: literal.into(),
    }
}

/// Parser that consumes the longest prefix satisfying a predicate, possibly empty
pub struct TakeWhile<F> {
    predicate: F,
}

impl<F> fmt::Debug for TakeWhile<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TakeWhile")
    }
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let next = cursor.advance_while(&self.predicate);
        Ok((cursor.slice_to(&next), next))
    }
}

pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile { predicate }
}

/// Parser that consumes the longest non-empty prefix satisfying a predicate
pub struct TakeWhile1<F> {
    predicate: F,
}

impl<F> fmt::Debug for TakeWhile1<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TakeWhile1")
    }
}

impl<'code, F> Parser<'code> for TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let next = cursor.advance_while(&self.predicate);
        if next == cursor {
            return Err(Failure::new("tailWhile1", cursor));
        }
        Ok((cursor.slice_to(&next), next))
    }
}

pub fn take_while1<F>(predicate: F) -> TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile1 { predicate }
}

/// Consume the longest prefix on which `predicate` does not hold
pub fn take_till<F>(predicate: F) -> TakeWhile<impl Fn(char) -> bool>
where
    F: Fn(char) -> bool,
{
    take_while(move |ch| !predicate(ch))
}

/// Consume everything up to, not including, the first `stop`
pub fn take_till_char(stop: char) -> TakeWhile<impl Fn(char) -> bool + Copy> {
    take_while(move |ch| ch != stop)
}

/// Parser that consumes all remaining input
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeText;

impl<'code> Parser<'code> for TakeText {
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let rest = cursor.remaining();
        Ok((rest, cursor.forward(rest.len())))
    }
}

pub fn take_text() -> TakeText {
    TakeText
}
