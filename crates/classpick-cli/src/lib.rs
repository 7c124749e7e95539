//! Command-line host for the classpick completion extractors.
//!
//! ```bash
//! classpick src/Button.tsx --marker '|' --suggest bg-blue-600
//! classpick styles.css --line 3 --column 18 --format json
//! ```

pub mod args;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod output;
pub mod tracing_config;
