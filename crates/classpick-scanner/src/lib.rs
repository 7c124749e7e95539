//! Cursor-aware locators for the classpick scanner.
//!
//! Each locator finds the construct enclosing a cursor without parsing the
//! surrounding language:
//! - `locate_string` - the quoted literal at the cursor, tolerating escapes
//!   and an unterminated trailing literal
//! - `locate_call` - the innermost allowed `name(...)` invocation
//! - `locate_directive` - the `--name: value;` declaration being edited
//! - `locate_object_value` - the string value of an object-literal key
//!
//! All offsets are byte offsets into the scanned `&str`. Every locator
//! returns `None` rather than failing on malformed or partial input.

pub mod names;
pub use names::{DirectiveNames, NameSet};

pub mod string_literal;
pub use string_literal::locate_string;

pub mod call_site;
pub use call_site::{CallSite, locate_call};

pub mod directive;
pub use directive::{Directive, locate_directive};

pub mod object_property;
pub use object_property::{KeyKind, ObjectProperty, locate_object_value};
