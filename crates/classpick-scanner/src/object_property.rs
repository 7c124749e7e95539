//! Object-property locator.
//!
//! Decides whether the string literal at the cursor is the value of an
//! object-literal key:
//!
//! ```typescript
//! const variants = { primary: 'text-red-500', 'on-dark': "text-white", [size]: `p-2` }
//! ```
//!
//! The trigger shape `<key> ":" <string>` also occurs in ternaries
//! (`cond ? 'a' : 'b'`) and switch labels (`case 'x':`). Those two shapes are
//! rejected; others (type annotations, labelled statements) are not and may
//! still be reported.

use classpick_common::chars::{
    identifier_start_back, is_key_quote, is_line_break, skip_whitespace_back,
};
use classpick_common::limits::MAX_COMPUTED_KEY_LEN;
use classpick_common::{Lookback, ValueRegion};
use memchr::{memrchr, memrchr3};
use serde::Serialize;
use tracing::{debug, trace};

use crate::string_literal::{find_closing_quote, locate_string};

/// How an object key is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyKind {
    /// `primary: ...`
    Identifier,
    /// `'primary': ...` or `"primary": ...`
    Quoted,
    /// `[expr]: ...`, boundary approximated
    Computed,
}

/// A string value of an object-literal key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObjectProperty<'a> {
    /// Raw key text; quoted keys keep their quotes, computed keys their brackets
    pub key: &'a str,
    pub key_kind: KeyKind,
    /// The quoted value containing the cursor
    pub region: ValueRegion<'a>,
}

/// Find the object property whose string value contains `cursor`.
///
/// The string literal is the one opened by the nearest unescaped quote before
/// the cursor on its line. When that literal is not an object value (the
/// quote was an apostrophe inside another literal, say), the literals of the
/// line are paired from its start instead. Nothing before `lookback` is
/// read. The key and colon may be on earlier lines within the window.
pub fn locate_object_value<'a>(
    text: &'a str,
    cursor: usize,
    lookback: Lookback,
) -> Option<ObjectProperty<'a>> {
    let bytes = text.as_bytes();
    if cursor > bytes.len() {
        return None;
    }

    let floor = lookback.floor(text, cursor);
    let line_start = memrchr(b'\n', &bytes[floor..cursor]).map_or(floor, |rel| floor + rel + 1);

    let nearest = nearest_literal(text, line_start, cursor);
    let nearest_start = nearest.as_ref().map(|region| region.start);
    if let Some(property) = nearest.and_then(|region| property_for(text, region, floor)) {
        return Some(property);
    }

    let Some(region) = locate_string(&text[line_start..], line_start, cursor) else {
        trace!(cursor, "no string literal at cursor");
        return None;
    };
    if nearest_start == Some(region.start) {
        return None;
    }
    property_for(text, region, floor)
}

/// The literal opened by the nearest unescaped quote before `cursor`,
/// searching back to `line_start`. Unterminated literals run to the end of
/// the text.
fn nearest_literal(text: &str, line_start: usize, cursor: usize) -> Option<ValueRegion<'_>> {
    let bytes = text.as_bytes();
    let mut end = cursor;
    let open = loop {
        let pos = line_start + memrchr3(b'\'', b'"', b'`', &bytes[line_start..end])?;
        if pos == line_start || bytes[pos - 1] != b'\\' {
            break pos;
        }
        end = pos;
    };

    let close = find_closing_quote(bytes, open + 1, bytes[open]).unwrap_or(bytes.len());
    if cursor > close {
        trace!(open, close, "nearest literal closes before cursor");
        return None;
    }
    Some(ValueRegion::borrowed(open, close, &text[open + 1..close]))
}

/// Key of the property whose value is `region`, if the literal is one.
fn property_for<'a>(
    text: &'a str,
    region: ValueRegion<'a>,
    floor: usize,
) -> Option<ObjectProperty<'a>> {
    let bytes = text.as_bytes();

    // The value must follow a colon.
    let before_value = skip_whitespace_back(bytes, region.start, floor);
    if before_value <= floor || bytes[before_value - 1] != b':' {
        trace!(open = region.start, "string is not preceded by a colon");
        return None;
    }
    let colon = before_value - 1;

    let key_end = skip_whitespace_back(bytes, colon, floor);
    if key_end <= floor {
        return None;
    }

    let last = bytes[key_end - 1];
    let (key_start, key_kind) = if is_key_quote(last) {
        (quoted_key_start(bytes, key_end - 1, floor)?, KeyKind::Quoted)
    } else if last == b']' {
        (computed_key_start(bytes, key_end - 1, floor), KeyKind::Computed)
    } else {
        let start = identifier_start_back(text, key_end, floor);
        if start == key_end {
            trace!(colon, "no key before colon");
            return None;
        }
        (start, KeyKind::Identifier)
    };

    if is_case_label(text, key_start, floor) {
        trace!(key_start, "rejecting switch case label");
        return None;
    }

    let context = skip_whitespace_back(bytes, key_start, floor);
    if context > floor && bytes[context - 1] == b'?' {
        trace!(key_start, "rejecting ternary branch");
        return None;
    }

    let key = &text[key_start..key_end];
    debug!(key, ?key_kind, start = region.start, end = region.end, "object property found");
    Some(ObjectProperty {
        key,
        key_kind,
        region,
    })
}

/// Offset of the opening quote of a quoted key whose closing quote is at `close`.
fn quoted_key_start(bytes: &[u8], close: usize, floor: usize) -> Option<usize> {
    let quote = bytes[close];
    let mut pos = close;
    while pos > floor {
        pos -= 1;
        let byte = bytes[pos];
        if is_line_break(byte) {
            return None;
        }
        if byte == quote && (pos == floor || bytes[pos - 1] != b'\\') {
            return Some(pos);
        }
    }
    None
}

/// Offset of the `[` opening a computed key closed at `close`.
///
/// Falls back to `close` itself when no balanced `[` is found nearby.
fn computed_key_start(bytes: &[u8], close: usize, floor: usize) -> usize {
    let limit = floor.max(close.saturating_sub(MAX_COMPUTED_KEY_LEN));
    let mut depth = 0usize;
    let mut pos = close + 1;
    while pos > limit {
        pos -= 1;
        match bytes[pos] {
            b']' => depth += 1,
            b'[' => {
                depth -= 1;
                if depth == 0 {
                    return pos;
                }
            }
            _ => {}
        }
    }
    close
}

/// Whether the five characters before the key (within the window) spell `case`.
fn is_case_label(text: &str, key_start: usize, floor: usize) -> bool {
    text.get(key_start.saturating_sub(5).max(floor)..key_start)
        .is_some_and(|prefix| prefix.trim().eq_ignore_ascii_case("case"))
}

#[cfg(test)]
#[path = "../tests/object_property_tests.rs"]
mod object_property_tests;
