/// Immutable position in a text being parsed
///
/// A cursor is a copy of a reference to the full text plus a byte offset
/// into it. Advancing never mutates a cursor; it returns a new one, so any
/// saved copy stays valid and can be resumed from later. This is what makes
/// backtracking in [`or`](crate::or::or) free.
///
/// The offset always sits on a `char` boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    text: &'code str,
    /// Byte offset of the next unread unit
    position: usize,
}

impl<'code> TextCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        TextCursor { text, position: 0 }
    }

    /// Get the unit at the current position without consuming it
    ///
    /// Returns `None` at end of input.
    pub fn value(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance past the current unit
    ///
    /// If already at the end, returns a cursor still positioned at the end.
    pub fn next(self) -> Self {
        match self.value() {
            Some(ch) => self.forward(ch.len_utf8()),
            None => self,
        }
    }

    /// Advance past exactly `count` units
    ///
    /// Returns `None` without moving if fewer than `count` units remain.
    pub fn advance(self, count: usize) -> Option<Self> {
        if count == 0 {
            return Some(self);
        }
        self.remaining()
            .char_indices()
            .nth(count - 1)
            .map(|(offset, ch)| self.forward(offset + ch.len_utf8()))
    }

    /// Advance past the longest prefix whose units all satisfy `predicate`
    pub fn advance_while<F>(self, predicate: F) -> Self
    where
        F: Fn(char) -> bool,
    {
        self.forward(crate::ascii::iterate_while(self.remaining(), predicate))
    }

    /// Advance by a byte length that was measured on [`remaining`](Self::remaining)
    pub(crate) fn forward(self, bytes: usize) -> Self {
        debug_assert!(self.text.is_char_boundary(self.position + bytes));
        TextCursor {
            text: self.text,
            position: self.position + bytes,
        }
    }

    /// Text between this cursor and a later cursor over the same input
    pub fn slice_to(&self, later: &TextCursor<'code>) -> &'code str {
        &self.text[self.position..later.position]
    }

    /// The unread part of the input
    pub fn remaining(&self) -> &'code str {
        &self.text[self.position..]
    }

    /// Number of units left to read
    pub fn remaining_len(&self) -> usize {
        self.remaining().chars().count()
    }

    /// Byte offset of the cursor in the full input
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.text.len()
    }

    /// The full input this cursor walks over
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// Consume the cursor and return the full input and current offset
    pub fn inner(self) -> (&'code str, usize) {
        (self.text, self.position)
    }
}
