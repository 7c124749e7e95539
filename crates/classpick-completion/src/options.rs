//! Completion options.
//!
//! Options deserialize from the camelCase JSON shape hosts already use for
//! the UnoCSS presets; every field is optional and falls back to its
//! default.

use classpick_common::Lookback;
use serde::{Deserialize, Deserializer, Serialize};

use crate::debug::DebugSink;

/// Function names that trigger completion by default.
pub const DEFAULT_FUNCTIONS: &[&str] = &["clsx", "cn", "classnames", "cls", "cva", "tv"];

/// Directive names that trigger completion by default
/// (`applyVariable` of the directives transformer).
pub const DEFAULT_DIRECTIVES: &[&str] = &["--at-apply", "--uno-apply", "--uno"];

/// Accept either a single string or a list of strings.
fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionOptions {
    /// Function names whose string arguments hold class lists.
    pub autocomplete_functions: Vec<String>,
    /// Directive names whose values hold class lists.
    #[serde(deserialize_with = "deserialize_one_or_many")]
    pub directives: Vec<String>,
    /// How far, in characters, call and object lookups scan back from the cursor.
    pub lookback_window: Lookback,
    pub enable_functions: bool,
    pub enable_directives: bool,
    pub enable_objects: bool,
    /// Receives debug messages; never serialized.
    #[serde(skip)]
    pub debug: DebugSink,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        CompletionOptions {
            autocomplete_functions: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            directives: DEFAULT_DIRECTIVES.iter().map(|s| s.to_string()).collect(),
            lookback_window: Lookback::default(),
            enable_functions: true,
            enable_directives: true,
            enable_objects: true,
            debug: DebugSink::none(),
        }
    }
}

impl CompletionOptions {
    pub fn with_debug(mut self, debug: DebugSink) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
