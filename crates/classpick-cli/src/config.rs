//! Options file loading and command-line overrides.
//!
//! The options file is the JSON form of `CompletionOptions`:
//!
//! ```jsonc
//! {
//!   // functions whose string arguments hold classes
//!   "autocompleteFunctions": ["cn", "tw"],
//!   "directives": "--uno",
//!   "lookbackWindow": 4000,
//!   "enableObjects": false,
//! }
//! ```

use anyhow::{Context, Result, bail};
use classpick_common::Lookback;
use classpick_completion::CompletionOptions;
use std::path::Path;
use tracing::{debug, warn};

use crate::args::CliArgs;

/// Parse an options file. Comments and trailing commas are accepted.
pub fn parse_options(source: &str) -> Result<CompletionOptions> {
    let stripped = strip_jsonc(source);
    let normalized = remove_trailing_commas(&stripped);
    let options = serde_json::from_str(&normalized).context("failed to parse options JSON")?;
    Ok(options)
}

pub fn load_options(path: &Path) -> Result<CompletionOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file: {}", path.display()))?;
    parse_options(&source)
        .with_context(|| format!("failed to load options file: {}", path.display()))
}

/// Build the effective options: file (or defaults), then flags, then validation.
pub fn resolve_options(args: &CliArgs) -> Result<CompletionOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => CompletionOptions::default(),
    };

    if !args.functions.is_empty() {
        options.autocomplete_functions = args.functions.clone();
    }
    if !args.directives.is_empty() {
        options.directives = args.directives.clone();
    }
    if let Some(lookback) = args.lookback {
        options.lookback_window = Lookback(lookback);
    }

    validate_options(&options)?;
    debug!(
        functions = ?options.autocomplete_functions,
        directives = ?options.directives,
        lookback = options.lookback_window.chars(),
        "options resolved"
    );
    Ok(options)
}

pub fn validate_options(options: &CompletionOptions) -> Result<()> {
    if options.autocomplete_functions.iter().any(|name| name.trim().is_empty()) {
        bail!("autocompleteFunctions must not contain empty names");
    }
    if let Some(name) = options
        .directives
        .iter()
        .find(|name| !name.starts_with("--") || name.len() == 2)
    {
        bail!("directive '{name}' must start with '--' followed by a name");
    }
    if options.lookback_window.chars() == 0 {
        bail!("lookbackWindow must be greater than zero");
    }
    if !(options.enable_functions || options.enable_directives || options.enable_objects) {
        warn!("all extractors are disabled; nothing will be found");
    }
    Ok(())
}

/// Drop `//` and `/* */` comments outside string literals.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (ch, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                // Keep the newline so JSON error positions stay meaningful.
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push(next);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    if next == '\n' {
                        out.push(next);
                    }
                    prev = next;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Drop commas directly followed (ignoring whitespace) by `}` or `]`.
fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if ch == '"' {
            in_string = true;
        } else if ch == ',' {
            let next = input[idx + 1..].chars().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
