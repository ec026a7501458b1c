//! ASCII character classes and prefix helpers shared by the primitives

/// `'0'..='9'`
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Space or tab
pub fn is_horizontal_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Space, tab, line feed, form feed or carriage return
pub fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Match `prefix` against the start of `s`
///
/// Returns the byte offset in `s` just past the prefix, or `None` if `s`
/// does not start with `prefix`. The empty prefix matches everything at
/// offset 0. Matching is exact and case-sensitive.
pub fn match_prefix(prefix: &str, s: &str) -> Option<usize> {
    let mut expected = prefix.chars();
    let mut offset = 0;

    for ch in s.chars() {
        match expected.next() {
            Some(want) if want == ch => offset += ch.len_utf8(),
            Some(_) => return None,
            None => return Some(offset),
        }
    }

    // Input ran out; only a fully consumed prefix counts
    match expected.next() {
        Some(_) => None,
        None => Some(offset),
    }
}

/// Byte length of the longest prefix of `s` whose units satisfy `predicate`
pub fn iterate_while<F>(s: &str, predicate: F) -> usize
where
    F: Fn(char) -> bool,
{
    s.char_indices()
        .find(|&(_, ch)| !predicate(ch))
        .map_or(s.len(), |(offset, _)| offset)
}
