//! Character classification.
//!
//! All structural characters the scanner reacts to are ASCII, so the byte
//! helpers here are safe to apply to any position of a UTF-8 string: an
//! ASCII byte never occurs inside a multi-byte sequence.

/// Quote characters that open a string literal.
#[inline]
pub fn is_quote(byte: u8) -> bool {
    matches!(byte, b'\'' | b'"' | b'`')
}

/// Quote characters accepted around an object key (template literals are not keys).
#[inline]
pub fn is_key_quote(byte: u8) -> bool {
    matches!(byte, b'\'' | b'"')
}

/// ASCII whitespace as understood by the scanner (space, tab, line breaks, form feed).
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Line break characters.
#[inline]
pub fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

/// Identifier characters: letters, digits, `_` and `$`.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Separators between class tokens inside a value region.
#[inline]
pub fn is_token_separator(byte: u8) -> bool {
    is_whitespace(byte)
}

/// Walk back from `end` over whitespace and return the new offset.
///
/// Never moves below `floor`.
pub fn skip_whitespace_back(bytes: &[u8], end: usize, floor: usize) -> usize {
    let mut pos = end.min(bytes.len());
    while pos > floor && is_whitespace(bytes[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Walk back from `end` over identifier characters and return the start of the identifier.
///
/// Never moves below `floor`. Returns `end` when no identifier precedes it.
pub fn identifier_start_back(text: &str, end: usize, floor: usize) -> usize {
    let Some(prefix) = text.get(..end) else {
        return end;
    };
    let mut start = end;
    for (idx, ch) in prefix.char_indices().rev() {
        if idx < floor || !is_identifier_char(ch) {
            break;
        }
        start = idx;
    }
    start
}

#[cfg(test)]
#[path = "../tests/chars_tests.rs"]
mod chars_tests;
