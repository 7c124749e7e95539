//! Common types and utilities for the classpick scanner.
//!
//! This crate provides foundational types used across all classpick crates:
//! - Value regions (`ValueRegion`) handed from the locators to the token extractor
//! - Character classification for quotes, identifiers and whitespace
//! - Scan limits (lookback window) and their defaults
//! - Character/byte offset mapping (`SourceText`) and line/column lookup (`LineMap`)

// Value regions - quoted or directive spans inside the source (byte offsets)
pub mod region;
pub use region::ValueRegion;

// Character classification shared by every locator
pub mod chars;

// Centralized limits and thresholds
pub mod limits;
pub use limits::Lookback;

// Character offset <-> byte offset mapping
pub mod source_text;
pub use source_text::SourceText;

// Line/column lookup for hosts that address the cursor by position
pub mod position;
pub use position::{LineMap, Position};
