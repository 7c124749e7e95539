//! Result rendering: colored text for people, JSON for tools.

use anyhow::{Context, Result};
use classpick_common::{LineMap, SourceText};
use classpick_completion::{ExtractorMatch, Replacement};
use colored::Colorize;
use serde::Serialize;

/// Everything one invocation reports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub file: String,
    /// Character offset of the cursor
    pub cursor: usize,
    #[serde(rename = "match")]
    pub found: Option<ExtractorMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Replacement>,
}

impl Report {
    pub fn new(file: impl Into<String>, cursor: usize, found: Option<ExtractorMatch>) -> Self {
        Report {
            file: file.into(),
            cursor,
            found,
            replacement: None,
        }
    }

    /// Attach the edit replacing the found token with `suggestion`.
    pub fn with_suggestion(mut self, suggestion: Option<&str>) -> Self {
        self.replacement = match (&self.found, suggestion) {
            (Some(found), Some(suggestion)) => Some(found.result.resolve_replacement(suggestion)),
            _ => None,
        };
        self
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report")
}

/// Render the report as text. `text` is the scanned source, used to print
/// 1-based line:column locations.
pub fn render_text(report: &Report, text: &str, color: bool) -> String {
    let Some(found) = &report.found else {
        let message = format!("no completion token at cursor {}", report.cursor);
        let message = if color {
            message.yellow().to_string()
        } else {
            message
        };
        return format!("{}: {message}", report.file);
    };

    let location = Locator::new(text);
    let token = &found.result.token;
    let extractor = if color {
        found.extractor.green().bold().to_string()
    } else {
        found.extractor.to_string()
    };

    let mut out = format!(
        "{}:{}: {extractor}",
        report.file,
        location.describe(report.cursor)
    );
    push_field(&mut out, "extracted", &format!("{:?}", found.result.extracted), color);
    push_field(
        &mut out,
        "token",
        &format!(
            "{:?} [{}, {}) at {}",
            token.text,
            token.start,
            token.end,
            location.describe(token.start)
        ),
        color,
    );
    if let Some(replacement) = &report.replacement {
        push_field(
            &mut out,
            "replace",
            &format!(
                "[{}, {}) with {:?}",
                replacement.start, replacement.end, replacement.replacement
            ),
            color,
        );
    }
    out
}

fn push_field(out: &mut String, label: &str, value: &str, color: bool) {
    let label = format!("{label:<10}");
    let label = if color {
        label.dimmed().to_string()
    } else {
        label
    };
    out.push_str(&format!("\n  {label} {value}"));
}

/// Character offset to 1-based `line:column`.
struct Locator<'a> {
    source: SourceText<'a>,
    line_map: LineMap,
}

impl<'a> Locator<'a> {
    fn new(text: &'a str) -> Self {
        Locator {
            source: SourceText::new(text),
            line_map: LineMap::build(text),
        }
    }

    fn describe(&self, cursor: usize) -> String {
        let byte = self.source.char_to_byte(cursor).unwrap_or(self.source.len());
        let position = self.line_map.offset_to_position(byte, self.source.as_str());
        format!("{}:{}", position.line + 1, position.character + 1)
    }
}

#[cfg(test)]
#[path = "../tests/output_tests.rs"]
mod output_tests;
