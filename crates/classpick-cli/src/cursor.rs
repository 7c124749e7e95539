//! Cursor resolution.
//!
//! The cursor can be given as a character offset, as a marker embedded in
//! the file, or as a 1-based line and column. All three resolve to the
//! text to scan plus a character offset into it.

use anyhow::{Result, bail};
use classpick_common::{LineMap, Position, SourceText};

use crate::args::CliArgs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CursorSpec {
    /// Character offset
    Offset(usize),
    /// First occurrence of the marker, which is removed from the text
    Marker(String),
    /// 1-based line and column (in characters)
    LineColumn { line: u32, column: u32 },
}

impl CursorSpec {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        if let Some(offset) = args.cursor {
            return Ok(CursorSpec::Offset(offset));
        }
        if let Some(marker) = &args.marker {
            return Ok(CursorSpec::Marker(marker.clone()));
        }
        match (args.line, args.column) {
            (Some(line), Some(column)) => Ok(CursorSpec::LineColumn { line, column }),
            _ => bail!("a cursor is required: use --cursor, --marker or --line with --column"),
        }
    }

    /// Resolve against `source`, returning the text to scan and the cursor.
    pub fn resolve(&self, source: String) -> Result<(String, usize)> {
        match self {
            CursorSpec::Offset(offset) => {
                let len = SourceText::new(&source).char_len();
                if *offset > len {
                    bail!("cursor {offset} is past the end of the input ({len} characters)");
                }
                Ok((source, *offset))
            }
            CursorSpec::Marker(marker) => {
                if marker.is_empty() {
                    bail!("the cursor marker must not be empty");
                }
                let Some(byte) = source.find(marker.as_str()) else {
                    bail!("cursor marker {marker:?} not found in the input");
                };
                let cursor = SourceText::new(&source).byte_to_char(byte);
                let text = source.replacen(marker.as_str(), "", 1);
                Ok((text, cursor))
            }
            CursorSpec::LineColumn { line, column } => {
                let (Some(line_idx), Some(column_idx)) = (line.checked_sub(1), column.checked_sub(1))
                else {
                    bail!("line and column are 1-based");
                };
                let line_map = LineMap::build(&source);
                let Some(byte) =
                    line_map.position_to_offset(Position::new(line_idx, column_idx), &source)
                else {
                    bail!(
                        "line {line} is past the end of the input ({} lines)",
                        line_map.line_count()
                    );
                };
                let cursor = SourceText::new(&source).byte_to_char(byte);
                Ok((source, cursor))
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/cursor_tests.rs"]
mod cursor_tests;
