use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the classpick binary.
#[derive(Parser, Debug)]
#[command(
    name = "classpick",
    version,
    about = "Find the class-name token to complete at a cursor position"
)]
#[command(group(
    ArgGroup::new("position")
        .required(true)
        .args(["cursor", "marker", "line"])
))]
pub struct CliArgs {
    /// Source file to scan, or `-` for standard input.
    pub file: PathBuf,

    // ==================== Cursor ====================
    /// Cursor as a character offset into the file.
    #[arg(long)]
    pub cursor: Option<usize>,

    /// Text standing for the cursor; its first occurrence is removed before scanning.
    #[arg(long)]
    pub marker: Option<String>,

    /// 1-based line of the cursor.
    #[arg(long, requires = "column")]
    pub line: Option<u32>,

    /// 1-based column of the cursor, in characters.
    #[arg(long, requires = "line")]
    pub column: Option<u32>,

    // ==================== Options ====================
    /// JSON options file (camelCase keys, comments and trailing commas allowed).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Function whose string arguments hold classes. Repeat to list several; replaces the configured list.
    #[arg(long = "function", value_name = "NAME")]
    pub functions: Vec<String>,

    /// Directive whose value holds classes. Repeat to list several; replaces the configured list.
    #[arg(long = "directive", value_name = "NAME", allow_hyphen_values = true)]
    pub directives: Vec<String>,

    /// How far back, in characters, to look for an enclosing call or object key.
    #[arg(long, value_name = "CHARS")]
    pub lookback: Option<usize>,

    // ==================== Output ====================
    /// Also print the edit that replaces the token with this suggestion.
    #[arg(long, value_name = "TEXT")]
    pub suggest: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Append extractor debug messages to this file.
    #[arg(long = "debug-log", value_name = "PATH")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    /// Whether the file argument names standard input.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;
