use crate::cursor::TextCursor;
use crate::parser::{ParseStep, Parser};
use std::fmt;

/// Stateful scanner: folds a step function over units for as long as it yields a new state
///
/// The initial state is cloned at the start of every run, so the same
/// scanner can be run repeatedly (or from several threads) without runs
/// seeing each other's state. Scanning never fails; it may consume nothing.
pub struct RunScanner<S, F> {
    initial: S,
    step: F,
}

impl<S, F> fmt::Debug for RunScanner<S, F>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunScanner")
            .field("initial", &self.initial)
            .field("step", &"<function>")
            .finish()
    }
}

impl<S, F> RunScanner<S, F>
where
    S: Clone,
    F: Fn(&S, char) -> Option<S>,
{
    fn run<'code>(&self, cursor: TextCursor<'code>) -> (&'code str, S, TextCursor<'code>) {
        let mut state = self.initial.clone();
        let rest = cursor.remaining();
        let mut consumed = rest.len();

        for (offset, ch) in rest.char_indices() {
            match (self.step)(&state, ch) {
                Some(next) => state = next,
                None => {
                    consumed = offset;
                    break;
                }
            }
        }

        let next = cursor.forward(consumed);
        (cursor.slice_to(&next), state, next)
    }
}

impl<'code, S, F> Parser<'code> for RunScanner<S, F>
where
    S: Clone,
    F: Fn(&S, char) -> Option<S>,
{
    type Output = (&'code str, S);

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (scanned, state, next) = self.run(cursor);
        Ok(((scanned, state), next))
    }
}

/// Scanner that returns only the consumed slice
pub struct Scan<S, F> {
    scanner: RunScanner<S, F>,
}

impl<S, F> fmt::Debug for Scan<S, F>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scan").field(&self.scanner).finish()
    }
}

impl<'code, S, F> Parser<'code> for Scan<S, F>
where
    S: Clone,
    F: Fn(&S, char) -> Option<S>,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseStep<'code, Self::Output> {
        let (scanned, _, next) = self.scanner.run(cursor);
        Ok((scanned, next))
    }
}

/// Consume units while `step` keeps producing a state, returning the consumed slice
pub fn scan<S, F>(initial: S, step: F) -> Scan<S, F>
where
    S: Clone,
    F: Fn(&S, char) -> Option<S>,
{
    Scan {
        scanner: run_scanner(initial, step),
    }
}

/// Like [`scan`], but also returns the final state
pub fn run_scanner<S, F>(initial: S, step: F) -> RunScanner<S, F>
where
    S: Clone,
    F: Fn(&S, char) -> Option<S>,
{
    RunScanner { initial, step }
}
