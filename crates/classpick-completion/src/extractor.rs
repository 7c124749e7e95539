//! Completion extractors.
//!
//! Each extractor pairs one locator with the token extractor. Offsets here
//! are byte offsets; `CompletionEngine` converts to and from characters.

use classpick_common::Lookback;
use classpick_scanner::{
    DirectiveNames, NameSet, locate_call, locate_directive, locate_object_value, locate_string,
};

use crate::debug::DebugSink;
use crate::token::{CompletionResult, extract_token};

/// Finds the token to complete for one kind of construct.
pub trait Extractor: Send + Sync {
    /// Stable name reported alongside results.
    fn name(&self) -> &'static str;

    /// Extract the completion token at byte offset `cursor`.
    fn extract(&self, text: &str, cursor: usize) -> Option<CompletionResult>;
}

/// Completes inside string arguments of allowed function calls.
///
/// ```typescript
/// cn('px-2 text-|', isActive && 'bg-blue-500')
/// ```
#[derive(Debug, Clone)]
pub struct FunctionExtractor {
    functions: Vec<String>,
    allowed: NameSet,
    lookback: Lookback,
    debug: DebugSink,
}

impl FunctionExtractor {
    pub fn new<I, S>(functions: I, lookback: Lookback, debug: DebugSink) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let functions: Vec<String> = functions.into_iter().map(Into::into).collect();
        let allowed = NameSet::new(functions.iter().cloned());
        FunctionExtractor {
            functions,
            allowed,
            lookback,
            debug,
        }
    }
}

impl Extractor for FunctionExtractor {
    fn name(&self) -> &'static str {
        "class-functions"
    }

    fn extract(&self, text: &str, cursor: usize) -> Option<CompletionResult> {
        let Some(call) = locate_call(text, cursor, &self.allowed, self.lookback) else {
            self.debug.emit(|| {
                format!(
                    "No functions called. cursor={cursor}, fn=[{}]",
                    self.functions.join(",")
                )
            });
            return None;
        };

        let Some(region) = locate_string(call.args_content, call.args_start, cursor) else {
            self.debug
                .emit(|| format!("No string literal inside function {}()", call.callee));
            return None;
        };

        let result = extract_token(cursor, &region);
        if result.is_none() {
            self.debug
                .emit(|| format!("The cursor is not inside a string of {}()", call.callee));
        }
        result
    }
}

/// Completes inside CSS directive values.
///
/// ```css
/// .btn { --uno: px-4 hover:bg-|; }
/// ```
#[derive(Debug, Clone)]
pub struct DirectiveExtractor {
    directives: DirectiveNames,
    debug: DebugSink,
}

impl DirectiveExtractor {
    pub fn new<I, S>(directives: I, debug: DebugSink) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DirectiveExtractor {
            directives: DirectiveNames::new(directives),
            debug,
        }
    }
}

impl Extractor for DirectiveExtractor {
    fn name(&self) -> &'static str {
        "css-directives"
    }

    fn extract(&self, text: &str, cursor: usize) -> Option<CompletionResult> {
        let Some(directive) = locate_directive(text, cursor, &self.directives) else {
            self.debug.emit(|| {
                let names: Vec<&str> = self.directives.iter().collect();
                format!(
                    "No directive detected. cursor={cursor}, directives=[{}]",
                    names.join(",")
                )
            });
            return None;
        };

        let result = extract_token(cursor, &directive.region);
        if result.is_none() {
            self.debug
                .emit(|| format!("No item inside directive {}", directive.name));
        }
        result
    }
}

/// Completes inside string values of object-literal keys.
///
/// ```typescript
/// const variants = { primary: 'bg-blue-500 text-|' }
/// ```
#[derive(Debug, Clone)]
pub struct ObjectExtractor {
    lookback: Lookback,
    debug: DebugSink,
}

impl ObjectExtractor {
    pub fn new(lookback: Lookback, debug: DebugSink) -> Self {
        ObjectExtractor { lookback, debug }
    }
}

impl Extractor for ObjectExtractor {
    fn name(&self) -> &'static str {
        "object-completion"
    }

    fn extract(&self, text: &str, cursor: usize) -> Option<CompletionResult> {
        let Some(property) = locate_object_value(text, cursor, self.lookback) else {
            self.debug
                .emit(|| format!("No object property found. cursor={cursor}"));
            return None;
        };

        self.debug
            .emit(|| format!("Found object property: [{}]", property.key));
        extract_token(cursor, &property.region)
    }
}

#[cfg(test)]
#[path = "../tests/extractor_tests.rs"]
mod extractor_tests;
