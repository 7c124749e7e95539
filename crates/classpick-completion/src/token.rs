//! Token extraction.
//!
//! A value region holds a whitespace-separated class list that may group
//! variants in parentheses, e.g. `hover:(bg-red text-white) b-(1 solid #555)`.
//! The token under the cursor runs from just after the nearest separator or
//! `(` before the cursor to the nearest separator or `)` after it, so a
//! completion inside a group never swallows the group's parentheses.

use classpick_common::ValueRegion;
use classpick_common::chars::is_token_separator;
use serde::Serialize;
use tracing::trace;

/// The replaceable token under the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Full token text, including characters after the cursor
    pub text: String,
    /// Offset of the first token character
    pub start: usize,
    /// Offset one past the last token character
    pub end: usize,
}

/// An edit replacing `[start, end)` with `replacement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// The outcome of a successful extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    /// The part of the token typed before the cursor, used to filter suggestions
    pub extracted: String,
    /// The span a suggestion replaces
    pub token: Token,
}

impl CompletionResult {
    /// Build the edit that replaces the token with `suggestion`.
    ///
    /// The source text is not touched; applying the edit is up to the caller.
    pub fn resolve_replacement(&self, suggestion: impl Into<String>) -> Replacement {
        Replacement {
            start: self.token.start,
            end: self.token.end,
            replacement: suggestion.into(),
        }
    }

    /// Re-express the token offsets through `map`, e.g. from bytes to characters.
    pub fn map_offsets(self, map: impl Fn(usize) -> usize) -> Self {
        CompletionResult {
            extracted: self.extracted,
            token: Token {
                text: self.token.text,
                start: map(self.token.start),
                end: map(self.token.end),
            },
        }
    }
}

/// Compute the token under `cursor` inside `region`.
///
/// Returns `None` when the cursor is outside `[region.start, region.end]`
/// or sits on the opening delimiter itself.
pub fn extract_token(cursor: usize, region: &ValueRegion<'_>) -> Option<CompletionResult> {
    if !region.contains(cursor) {
        trace!(cursor, start = region.start, end = region.end, "cursor outside value region");
        return None;
    }

    let content: &str = &region.content;
    let relative = cursor.checked_sub(region.content_start())?;
    if relative > content.len() || !content.is_char_boundary(relative) {
        return None;
    }

    let bytes = content.as_bytes();
    let token_start = bytes[..relative]
        .iter()
        .rposition(|&byte| is_token_separator(byte) || byte == b'(')
        .map_or(0, |pos| pos + 1);
    let token_end = bytes[relative..]
        .iter()
        .position(|&byte| is_token_separator(byte) || byte == b')')
        .map_or(content.len(), |pos| relative + pos);

    let base = region.content_start();
    let result = CompletionResult {
        extracted: content[token_start..relative].to_string(),
        token: Token {
            text: content[token_start..token_end].to_string(),
            start: base + token_start,
            end: base + token_end,
        },
    };
    trace!(
        extracted = %result.extracted,
        start = result.token.start,
        end = result.token.end,
        "token extracted"
    );
    Some(result)
}

#[cfg(test)]
#[path = "../tests/token_tests.rs"]
mod token_tests;
