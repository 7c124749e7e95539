//! Class-name completion extraction.
//!
//! Given a document and a cursor, finds the class token the editor should
//! replace with a completion suggestion. Three extractors locate the value
//! region being edited:
//! - `FunctionExtractor` - string arguments of `clsx(...)`, `cn(...)` and friends
//! - `DirectiveExtractor` - values of `--uno: ...;` style CSS directives
//! - `ObjectExtractor` - string values of object-literal keys
//!
//! The token extractor then computes the replaceable token inside that
//! region. `CompletionEngine` runs the extractors in order and exposes the
//! host operation in character offsets.

pub mod debug;
pub use debug::DebugSink;

pub mod token;
pub use token::{CompletionResult, Replacement, Token, extract_token};

pub mod extractor;
pub use extractor::{DirectiveExtractor, Extractor, FunctionExtractor, ObjectExtractor};

pub mod options;
pub use options::{CompletionOptions, DEFAULT_DIRECTIVES, DEFAULT_FUNCTIONS};

pub mod engine;
pub use engine::{CompletionEngine, ExtractorMatch};
