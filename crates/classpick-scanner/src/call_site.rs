//! Call-site locator.
//!
//! Finds the innermost invocation `name(...)` of an allowed function whose
//! parentheses enclose the cursor. Argument lists may span lines and nest
//! arbitrarily; only raw `(`/`)` characters are counted.

use classpick_common::Lookback;
use classpick_common::chars::{identifier_start_back, skip_whitespace_back};
use memchr::{memchr2, memrchr};
use serde::Serialize;
use tracing::{debug, trace};

use crate::names::NameSet;

/// An invocation of an allowed function enclosing the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallSite<'a> {
    /// The matched function name
    pub callee: &'a str,
    /// Offset of the first character after `(`
    pub args_start: usize,
    /// Offset of the matching `)`
    pub close_paren: usize,
    /// Raw text between the parentheses
    pub args_content: &'a str,
}

/// Find the innermost allowed call whose parentheses contain `cursor`.
///
/// Scans backward from the cursor for `(`, never further than `lookback`
/// characters. For each `(`, the identifier right before it (whitespace in
/// between is allowed) is the candidate callee. An allowed callee whose
/// matching `)` is at or after the cursor is returned; otherwise the scan
/// continues outward from just before the rejected `(`.
///
/// A `(` without a matching `)` is skipped, not reported.
pub fn locate_call<'a>(
    text: &'a str,
    cursor: usize,
    allowed: &NameSet,
    lookback: Lookback,
) -> Option<CallSite<'a>> {
    let bytes = text.as_bytes();
    if cursor > bytes.len() || allowed.is_empty() {
        return None;
    }

    let floor = lookback.floor(text, cursor);
    let mut search_end = cursor;

    while search_end > floor {
        let Some(rel) = memrchr(b'(', &bytes[floor..search_end]) else {
            break;
        };
        let open = floor + rel;
        search_end = open;

        let name_end = skip_whitespace_back(bytes, open, 0);
        let name_start = identifier_start_back(text, name_end, 0);
        let callee = &text[name_start..name_end];

        if callee.is_empty() || !allowed.contains(callee) {
            trace!(open, callee, "skipping paren: callee not allowed");
            continue;
        }

        let Some(close_paren) = find_matching_paren(bytes, open + 1) else {
            trace!(open, callee, "skipping paren: unbalanced");
            continue;
        };

        if cursor <= close_paren {
            debug!(callee, args_start = open + 1, close_paren, "call site found");
            return Some(CallSite {
                callee,
                args_start: open + 1,
                close_paren,
                args_content: &text[open + 1..close_paren],
            });
        }
        trace!(open, close_paren, callee, "skipping call: cursor after its close");
    }

    trace!(cursor, floor, "no call site within lookback window");
    None
}

/// Index of the `)` matching a `(` whose contents start at `from`.
pub fn find_matching_paren(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut pos = from;
    while pos < bytes.len() {
        let hit = pos + memchr2(b'(', b')', &bytes[pos..])?;
        if bytes[hit] == b'(' {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(hit);
            }
        }
        pos = hit + 1;
    }
    None
}

#[cfg(test)]
#[path = "../tests/call_site_tests.rs"]
mod call_site_tests;
