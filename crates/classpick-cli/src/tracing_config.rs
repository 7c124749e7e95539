//! Tracing setup for the `classpick` binary.
//!
//! Output format is chosen by `CLASSPICK_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented output via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! CLASSPICK_LOG=debug classpick src/App.tsx --marker '|'
//! CLASSPICK_LOG=classpick_scanner=trace CLASSPICK_LOG_FORMAT=tree classpick src/App.tsx --cursor 120
//! ```
//!
//! Extractor debug messages use the `classpick::debug` target, so
//! `CLASSPICK_LOG=classpick::debug=debug` shows only those.
//!
//! Nothing is installed unless `CLASSPICK_LOG` or `RUST_LOG` is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "CLASSPICK_LOG";
const LOG_FORMAT_VAR: &str = "CLASSPICK_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default())
    }
}

/// `CLASSPICK_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_VAR) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Stdout carries the command's result and is never written to.
pub fn init_tracing() {
    if std::env::var_os(LOG_VAR).is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tracing_config_tests;
