//! Value regions.
//!
//! A value region is the span of source text that holds an editable class
//! list: the inside of a string literal, or the value of a CSS directive.
//! Locators produce regions; the token extractor consumes them.

use std::borrow::Cow;

use serde::Serialize;

/// A delimited span of source text and the text between its delimiters.
///
/// `start` is the byte offset of the opening delimiter (a quote, or the
/// character right before a directive value) and `end` the byte offset of
/// the closing delimiter. For an unterminated string literal `end` is the
/// end of the scanned text. `content` is the text in `start + 1 .. end`.
///
/// Directive values have their line breaks replaced by spaces, so `content`
/// may be owned; string literal content is always borrowed from the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueRegion<'a> {
    /// Offset of the opening delimiter
    pub start: usize,
    /// Offset of the closing delimiter (or end of text when unterminated)
    pub end: usize,
    /// Text between the delimiters
    pub content: Cow<'a, str>,
}

impl<'a> ValueRegion<'a> {
    /// Create a region whose content is borrowed from the source.
    pub fn borrowed(start: usize, end: usize, content: &'a str) -> Self {
        ValueRegion {
            start,
            end,
            content: Cow::Borrowed(content),
        }
    }

    /// Create a region with rewritten content.
    pub fn owned(start: usize, end: usize, content: String) -> Self {
        ValueRegion {
            start,
            end,
            content: Cow::Owned(content),
        }
    }

    /// Offset of the first content character.
    #[inline]
    pub fn content_start(&self) -> usize {
        self.start + 1
    }

    /// Whether `cursor` lies within `[start, end]`.
    #[inline]
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor <= self.end
    }

    /// Detach the region from the source text it was scanned from.
    pub fn into_owned(self) -> ValueRegion<'static> {
        ValueRegion {
            start: self.start,
            end: self.end,
            content: Cow::Owned(self.content.into_owned()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/region_tests.rs"]
mod region_tests;
