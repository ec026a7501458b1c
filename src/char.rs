//! Single-unit parsers
//!
//! Every parser here looks at exactly one unit. On failure the returned
//! cursor is the one passed in.

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{ParseStep, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser that consumes one unit satisfying a predicate
pub struct Satisfy<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, label: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            label: label.into(),
        }
    }
}

impl<F> fmt::Debug for Satisfy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfy").field("label", &self.label).finish()
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        match cursor.value() {
            Some(ch) if (self.predicate)(ch) => Ok((ch, cursor.next())),
            _ => Err(Failure::new(self.label.clone(), cursor)),
        }
    }
}

/// Consume one unit if `predicate` holds for it, failing with `label` otherwise
pub fn satisfy<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, label)
}

/// Parser that transforms one unit and keeps it if the transformed value passes a predicate
pub struct SatisfyWith<T, P> {
    transform: T,
    predicate: P,
    label: Cow<'static, str>,
}

impl<T, P> fmt::Debug for SatisfyWith<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SatisfyWith")
            .field("label", &self.label)
            .finish()
    }
}

impl<'code, T, P, U> Parser<'code> for SatisfyWith<T, P>
where
    T: Fn(char) -> U,
    P: Fn(&U) -> bool,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        if let Some(ch) = cursor.value() {
            let value = (self.transform)(ch);
            if (self.predicate)(&value) {
                return Ok((value, cursor.next()));
            }
        }
        Err(Failure::new(self.label.clone(), cursor))
    }
}

pub fn satisfy_with<T, P, U>(
    transform: T,
    predicate: P,
    label: impl Into<Cow<'static, str>>,
) -> SatisfyWith<T, P>
where
    T: Fn(char) -> U,
    P: Fn(&U) -> bool,
{
    SatisfyWith {
        transform,
        predicate,
        label: label.into(),
    }
}

/// Parser that consumes one unit satisfying a predicate and discards it
pub struct Skip<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> fmt::Debug for Skip<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skip").field("label", &self.label).finish()
    }
}

impl<'code, F> Parser<'code> for Skip<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        match cursor.value() {
            Some(ch) if (self.predicate)(ch) => Ok(((), cursor.next())),
            _ => Err(Failure::new(self.label.clone(), cursor)),
        }
    }
}

pub fn skip<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Skip<F>
where
    F: Fn(char) -> bool,
{
    Skip {
        predicate,
        label: label.into(),
    }
}

/// Parser that consumes and returns any single unit
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        match cursor.value() {
            Some(ch) => Ok((ch, cursor.next())),
            None => Err(Failure::new("anyChar", cursor)),
        }
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific unit
pub fn char(expected: char) -> Satisfy<impl Fn(char) -> bool + Copy> {
    satisfy(move |ch| ch == expected, "char")
}

/// Parser that matches one specific unit and discards it
pub fn skip_char(expected: char) -> Skip<impl Fn(char) -> bool + Copy> {
    skip(move |ch| ch == expected, "skipChar")
}
