use crate::cursor::TextCursor;
use std::borrow::Cow;
use thiserror::Error;

/// Failure of a parse, identified by the label of the primitive that failed
///
/// The label is the whole diagnostic. Failures are not located and do not
/// accumulate: when an alternative exhausts its branches, only the last
/// attempted branch's label survives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}")]
pub struct ParseError {
    label: Cow<'static, str>,
}

impl ParseError {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            label: label.into(),
        }
    }

    /// Error reported when a primitive is built with arguments it cannot honor
    pub fn misuse(parser: &str) -> Self {
        ParseError::new(format!("wrong usage of \"{}\" parser", parser))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A failed parse step together with the position the attempt reached
///
/// The cursor may sit past the point where the step started if an inner
/// parser consumed input before failing. [`or`](crate::or::or) ignores it
/// and resumes from its own starting cursor; [`parse`](crate::parse) drops
/// it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct Failure<'code> {
    pub error: ParseError,
    pub cursor: TextCursor<'code>,
}

impl<'code> Failure<'code> {
    pub fn new(label: impl Into<Cow<'static, str>>, cursor: TextCursor<'code>) -> Self {
        Failure {
            error: ParseError::new(label),
            cursor,
        }
    }

    pub fn label(&self) -> &str {
        self.error.label()
    }

    pub fn into_error(self) -> ParseError {
        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_label() {
        let error = ParseError::new("uint8");
        assert_eq!(error.to_string(), "uint8");
        assert_eq!(error.label(), "uint8");
    }

    #[test]
    fn test_misuse_message() {
        let error = ParseError::misuse("take");
        assert_eq!(error.label(), "wrong usage of \"take\" parser");
    }

    #[test]
    fn test_failure_keeps_cursor() {
        let cursor = TextCursor::new("abc").next();
        let failure = Failure::new("char", cursor);

        assert_eq!(failure.to_string(), "char");
        assert_eq!(failure.cursor.position(), 1);
        assert_eq!(failure.into_error(), ParseError::new("char"));
    }

    #[test]
    fn test_owned_and_static_labels_compare_equal() {
        let owned = ParseError::new(String::from("string"));
        let borrowed = ParseError::new("string");
        assert_eq!(owned, borrowed);
    }
}
