//! Completion engine.
//!
//! Runs the configured extractors in order (function calls, directives,
//! object values) and returns the first match. The engine is immutable once
//! built and can be shared between threads; every request is independent.

use classpick_common::SourceText;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::extractor::{DirectiveExtractor, Extractor, FunctionExtractor, ObjectExtractor};
use crate::options::CompletionOptions;
use crate::token::CompletionResult;

/// A completion result together with the extractor that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtractorMatch {
    pub extractor: &'static str,
    #[serde(flatten)]
    pub result: CompletionResult,
}

pub struct CompletionEngine {
    extractors: SmallVec<[Box<dyn Extractor>; 3]>,
}

impl CompletionEngine {
    /// Build the extractors enabled in `options`.
    pub fn new(options: &CompletionOptions) -> Self {
        let mut extractors: SmallVec<[Box<dyn Extractor>; 3]> = SmallVec::new();
        if options.enable_functions {
            extractors.push(Box::new(FunctionExtractor::new(
                options.autocomplete_functions.iter().cloned(),
                options.lookback_window,
                options.debug.clone(),
            )));
        }
        if options.enable_directives {
            extractors.push(Box::new(DirectiveExtractor::new(
                options.directives.iter().cloned(),
                options.debug.clone(),
            )));
        }
        if options.enable_objects {
            extractors.push(Box::new(ObjectExtractor::new(
                options.lookback_window,
                options.debug.clone(),
            )));
        }
        CompletionEngine { extractors }
    }

    /// Build an engine from an explicit, ordered list of extractors.
    pub fn with_extractors(extractors: impl IntoIterator<Item = Box<dyn Extractor>>) -> Self {
        CompletionEngine {
            extractors: extractors.into_iter().collect(),
        }
    }

    /// Names of the active extractors, in the order they run.
    pub fn extractor_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extractors.iter().map(|extractor| extractor.name())
    }

    /// Extract the completion token at character offset `cursor`.
    ///
    /// The returned offsets are character offsets as well.
    pub fn extract(&self, content: &str, cursor: usize) -> Option<CompletionResult> {
        self.extract_match(content, cursor).map(|found| found.result)
    }

    /// Like [`extract`](Self::extract), also naming the extractor that matched.
    pub fn extract_match(&self, content: &str, cursor: usize) -> Option<ExtractorMatch> {
        let source = SourceText::new(content);
        let Some(byte_cursor) = source.char_to_byte(cursor) else {
            debug!(cursor, len = source.char_len(), "cursor past end of content");
            return None;
        };
        let found = self.extract_at_byte(content, byte_cursor)?;
        Some(ExtractorMatch {
            extractor: found.extractor,
            result: found.result.map_offsets(|offset| source.byte_to_char(offset)),
        })
    }

    /// Extract the completion token at byte offset `cursor`.
    pub fn extract_at_byte(&self, content: &str, cursor: usize) -> Option<ExtractorMatch> {
        for extractor in &self.extractors {
            if let Some(result) = extractor.extract(content, cursor) {
                debug!(
                    extractor = extractor.name(),
                    extracted = %result.extracted,
                    start = result.token.start,
                    end = result.token.end,
                    "completion token found"
                );
                return Some(ExtractorMatch {
                    extractor: extractor.name(),
                    result,
                });
            }
            trace!(extractor = extractor.name(), cursor, "extractor found nothing");
        }
        None
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        CompletionEngine::new(&CompletionOptions::default())
    }
}

#[cfg(test)]
#[path = "../tests/engine_tests.rs"]
mod engine_tests;
