//! Directive locator.
//!
//! Directives are CSS custom-property style declarations carrying class
//! lists, written as `<name> ws* ":" ws* <value> ";"`:
//!
//! ```css
//! .btn {
//!   --uno: px-4 py-2
//!          hover:bg-blue-600;
//! }
//! ```
//!
//! Values are raw class text, not quoted strings, so no escapes apply.

use classpick_common::ValueRegion;
use classpick_common::chars::{is_line_break, is_whitespace};
use memchr::memchr;
use serde::Serialize;
use tracing::{debug, trace};

use crate::names::DirectiveNames;

/// A directive whose value contains the cursor.
///
/// The value borrows from the scanned text and the name from the configured
/// name set, so the two may live for different spans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Directive<'t, 'n> {
    /// The matched directive name, e.g. `--uno`
    pub name: &'n str,
    /// The value, from the character before its first value character up to
    /// the terminating `;`
    pub region: ValueRegion<'t>,
}

/// One grammar match: name index, value start and `;` offset.
#[derive(Clone, Copy, Debug)]
struct DirectiveMatch {
    name: usize,
    value_start: usize,
    semicolon: usize,
}

/// Remembers the last `;` search so the text after each occurrence is
/// scanned at most once.
#[derive(Debug, Default)]
struct SemicolonCache {
    searched_from: usize,
    found: Option<Option<usize>>,
}

impl SemicolonCache {
    /// First `;` at or after `from`.
    fn next(&mut self, bytes: &[u8], from: usize) -> Option<usize> {
        if from >= self.searched_from {
            match self.found {
                // Nothing between the previous start and `found`, so it is
                // still the first `;` for any start up to it.
                Some(Some(found)) if from <= found => return Some(found),
                Some(None) => return None,
                _ => {}
            }
        }
        let found = bytes
            .get(from..)
            .and_then(|rest| memchr(b';', rest))
            .map(|offset| from + offset);
        self.searched_from = from;
        self.found = Some(found);
        found
    }
}

/// Find the directive whose value contains `cursor`.
///
/// Directives are matched left to right without overlap. Among the matches
/// whose value starts at or before the cursor, the last one is the directive
/// being edited; it is returned when the cursor lies in its value span.
pub fn locate_directive<'t, 'n>(
    text: &'t str,
    cursor: usize,
    names: &'n DirectiveNames,
) -> Option<Directive<'t, 'n>> {
    let bytes = text.as_bytes();
    if cursor > bytes.len() || names.is_empty() {
        return None;
    }

    let mut last: Option<DirectiveMatch> = None;
    // `None` once a name has no further occurrence.
    let mut next_hit: Vec<Option<usize>> = (0..names.len())
        .map(|index| names.find_from(index, bytes, 0))
        .collect();
    let mut semicolons = SemicolonCache::default();
    let mut pos = 0;

    while pos < bytes.len() {
        // Earliest occurrence of any name at or after `pos`.
        let mut at = None;
        for (index, hit) in next_hit.iter_mut().enumerate() {
            if hit.is_some_and(|offset| offset < pos) {
                *hit = names.find_from(index, bytes, pos);
            }
            if let Some(offset) = *hit {
                at = Some(at.map_or(offset, |best: usize| best.min(offset)));
            }
        }
        let Some(at) = at else {
            break;
        };
        // Any value found from here on starts after the cursor.
        if at > cursor {
            break;
        }

        let matched = (0..names.len())
            .filter(|&index| next_hit[index] == Some(at))
            .find_map(|index| {
                match_grammar(bytes, at, names.name(index).len(), index, &mut semicolons)
            });

        match matched {
            Some(found) => {
                if found.value_start - 1 > cursor {
                    break;
                }
                trace!(
                    name = names.name(found.name),
                    value_start = found.value_start,
                    semicolon = found.semicolon,
                    "directive candidate"
                );
                last = Some(found);
                pos = found.semicolon + 1;
            }
            None => pos = at + 1,
        }
    }

    let Some(found) = last else {
        trace!(cursor, "no directive before cursor");
        return None;
    };

    let start = found.value_start - 1;
    if cursor > found.semicolon {
        trace!(cursor, semicolon = found.semicolon, "cursor after directive value");
        return None;
    }

    let raw = &text[found.value_start..found.semicolon];
    let region = if raw.bytes().any(is_line_break) {
        // One space per line break character keeps offsets aligned with the source.
        let flattened = raw.replace(['\r', '\n'], " ");
        ValueRegion::owned(start, found.semicolon, flattened)
    } else {
        ValueRegion::borrowed(start, found.semicolon, raw)
    };

    let name = names.name(found.name);
    debug!(name, start, end = found.semicolon, "directive found");
    Some(Directive { name, region })
}

/// Match `ws* ":" ws* value ";"` after a name occurrence at `at`.
///
/// The value must be non-empty. When only whitespace separates `:` from
/// `;`, the last whitespace character is the value.
fn match_grammar(
    bytes: &[u8],
    at: usize,
    name_len: usize,
    name: usize,
    semicolons: &mut SemicolonCache,
) -> Option<DirectiveMatch> {
    let mut pos = skip_whitespace(bytes, at + name_len);
    if bytes.get(pos) != Some(&b':') {
        return None;
    }
    pos += 1;

    let after_colon = pos;
    pos = skip_whitespace(bytes, pos);
    let semicolon = semicolons.next(bytes, pos)?;

    let value_start = if semicolon > pos {
        pos
    } else if pos > after_colon {
        pos - 1
    } else {
        return None;
    };

    Some(DirectiveMatch {
        name,
        value_start,
        semicolon,
    })
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_whitespace(bytes[pos]) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
#[path = "../tests/directive_tests.rs"]
mod directive_tests;
