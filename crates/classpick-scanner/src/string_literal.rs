//! String literal locator.
//!
//! Finds the quoted literal (single, double or backtick) that contains the
//! cursor. Two behaviours set it apart from naive quote pairing:
//!
//! - `\` consumes the following character, so an escaped quote never closes
//!   the literal.
//! - A literal with no closing quote runs to the end of the scanned text.
//!   This is the common case while a class string is still being typed.

use classpick_common::ValueRegion;
use classpick_common::chars::is_quote;
use memchr::memchr2;
use tracing::trace;

/// Find the string literal in `content` that contains `cursor`.
///
/// `offset_base` is the absolute offset of `content[0]`; `cursor` and the
/// returned region are absolute. A closed literal contains the cursor when
/// `open < cursor <= close`, so a cursor sitting right before the closing
/// quote (just after the last typed character) is inside. An unterminated
/// literal contains every cursor after its opening quote and reports the end
/// of `content` as its end.
pub fn locate_string<'a>(
    content: &'a str,
    offset_base: usize,
    cursor: usize,
) -> Option<ValueRegion<'a>> {
    let bytes = content.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        let quote = bytes[i];
        if !is_quote(quote) {
            i += 1;
            continue;
        }

        let open = offset_base + i;
        if open >= cursor {
            // Literals opening at or after the cursor cannot contain it.
            trace!(open, cursor, "string scan passed the cursor");
            return None;
        }

        match find_closing_quote(bytes, i + 1, quote) {
            Some(close_rel) => {
                let close = offset_base + close_rel;
                if cursor <= close {
                    trace!(open, close, "cursor inside closed string literal");
                    return Some(ValueRegion::borrowed(
                        open,
                        close,
                        &content[i + 1..close_rel],
                    ));
                }
                i = close_rel + 1;
            }
            None => {
                trace!(open, "cursor inside unterminated string literal");
                return Some(ValueRegion::borrowed(
                    open,
                    offset_base + len,
                    &content[i + 1..],
                ));
            }
        }
    }

    None
}

/// Index of the quote closing a literal whose body starts at `from`.
///
/// Backslash escapes are consumed in pairs, so `\'` inside `'...'` is part of
/// the body. Returns `None` when the literal is unterminated.
pub fn find_closing_quote(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        let hit = j + memchr2(quote, b'\\', &bytes[j..])?;
        if bytes[hit] == quote {
            return Some(hit);
        }
        j = hit + 2;
    }
    None
}

#[cfg(test)]
#[path = "../tests/string_literal_tests.rs"]
mod string_literal_tests;
