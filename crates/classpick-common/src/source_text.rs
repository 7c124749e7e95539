//! Character offset <-> byte offset mapping.
//!
//! Hosts address the cursor in characters (code points) while the scanner
//! works on byte offsets into the UTF-8 text. `SourceText` converts at the
//! boundary and short-circuits for pure ASCII documents, where both
//! offsets coincide.

/// Borrowed source text with offset conversion helpers.
#[derive(Clone, Copy, Debug)]
pub struct SourceText<'a> {
    text: &'a str,
    ascii: bool,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        SourceText {
            text,
            ascii: text.is_ascii(),
        }
    }

    /// The underlying text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        if self.ascii {
            self.text.len()
        } else {
            self.text.chars().count()
        }
    }

    /// Convert a character offset to a byte offset.
    ///
    /// Returns `None` when `cursor` is past the end of the text.
    pub fn char_to_byte(&self, cursor: usize) -> Option<usize> {
        if self.ascii {
            return (cursor <= self.text.len()).then_some(cursor);
        }
        match self.text.char_indices().nth(cursor) {
            Some((idx, _)) => Some(idx),
            None if cursor == self.char_len() => Some(self.text.len()),
            None => None,
        }
    }

    /// Convert a byte offset to a character offset.
    ///
    /// Offsets inside a multi-byte character round up to the next character;
    /// offsets past the end are clamped to the end.
    pub fn byte_to_char(&self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        if self.ascii {
            return offset;
        }
        self.text
            .char_indices()
            .take_while(|(idx, _)| *idx < offset)
            .count()
    }
}

#[cfg(test)]
#[path = "../tests/source_text_tests.rs"]
mod source_text_tests;
