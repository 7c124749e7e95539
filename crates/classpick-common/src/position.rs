//! Line/column positions.
//!
//! Editors usually report the cursor as a line and column, while the
//! scanner uses offsets. This module provides the conversion.

/// A position in a source file (0-indexed line and column).
///
/// The column counts characters (code points) from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column in characters
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Line map for efficient offset <-> position conversion.
/// Stores the starting byte offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (line_starts[0] is always 0)
    line_starts: Vec<usize>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = source.as_bytes();

        for (i, &byte) in bytes.iter().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            } else if byte == b'\r' && bytes.get(i + 1) != Some(&b'\n') {
                // Lone \r (old Mac); \r\n is handled by its \n
                line_starts.push(i + 1);
            }
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a position.
    pub fn offset_to_position(&self, offset: usize, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = offset.min(source.len());
        let start = line_start.min(clamped_end);
        let slice = source.get(start..clamped_end).unwrap_or("");

        Position {
            line: line as u32,
            character: slice.chars().count() as u32,
        }
    }

    /// Convert a position to a byte offset.
    ///
    /// Returns `None` for a line past the end of the file. A column past the
    /// end of its line is clamped to the line end.
    pub fn position_to_offset(&self, position: Position, source: &str) -> Option<usize> {
        let line_idx = position.line as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_limit = self
            .line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(source.len());
        let slice = source.get(line_start..line_limit).unwrap_or("");

        let mut byte_count = 0;
        for ch in slice.chars().take(position.character as usize) {
            if ch == '\n' || ch == '\r' {
                break;
            }
            byte_count += ch.len_utf8();
        }

        Some(line_start + byte_count)
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;
