//! One `classpick` invocation: read, resolve, extract, render.

use anyhow::{Context, Result};
use classpick_completion::{CompletionEngine, DebugSink};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info_span, warn};

use crate::args::{CliArgs, OutputFormat};
use crate::config::resolve_options;
use crate::cursor::CursorSpec;
use crate::output::{Report, render_json, render_text};

/// Rendered output plus whether a token was found.
#[derive(Debug)]
pub struct RunOutput {
    pub rendered: String,
    pub found: bool,
}

pub fn run(args: &CliArgs, color: bool) -> Result<RunOutput> {
    let _span = info_span!("classpick", file = %args.file.display()).entered();

    let spec = CursorSpec::from_args(args)?;
    let mut options = resolve_options(args)?;
    if let Some(path) = &args.debug_log {
        options.debug = file_debug_sink(path)?;
    }

    let source = read_input(args)?;
    let (text, cursor) = spec.resolve(source)?;
    debug!(cursor, len = text.len(), "input resolved");

    let engine = CompletionEngine::new(&options);
    let found = engine.extract_match(&text, cursor);
    let report = Report::new(args.file.display().to_string(), cursor, found)
        .with_suggestion(args.suggest.as_deref());

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report, &text, color),
        OutputFormat::Json => render_json(&report)?,
    };
    Ok(RunOutput {
        rendered,
        found: report.found.is_some(),
    })
}

fn read_input(args: &CliArgs) -> Result<String> {
    if args.reads_stdin() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        return Ok(source);
    }
    std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))
}

/// A debug sink appending one line per message to `path`.
pub fn file_debug_sink(path: &Path) -> Result<DebugSink> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open debug log: {}", path.display()))?;
    let file = Mutex::new(file);
    Ok(DebugSink::new(move |message| {
        let Ok(mut file) = file.lock() else {
            return;
        };
        if let Err(err) = writeln!(file, "{message}") {
            warn!(%err, "failed to write debug log");
        }
    }))
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
