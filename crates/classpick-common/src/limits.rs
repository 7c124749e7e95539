//! Centralized scan limits.
//!
//! Every extraction runs on every keystroke of an actively edited document,
//! so backward scans are bounded. The bound is a precision/latency
//! trade-off: a construct opened further back than the window is not found.
//!
//! # Categories
//!
//! - **Lookback window**: how far the call-site and object-property locators
//!   scan backward from the cursor
//! - **Key window**: how far a computed object key is matched back to its `[`

// =============================================================================
// Lookback Window
// =============================================================================

/// Default number of characters scanned backward from the cursor.
///
/// Bounds the call-site search on single-line minified bundles that can
/// span megabytes. A call whose `(` lies further back is not found.
///
/// # Example
///
/// ```typescript
/// // With the default window, the cursor inside 'text-red' still finds `cn`
/// // as long as `cn(` starts fewer than 2000 characters before it:
/// const cls = cn('text-red', /* ... up to ~2000 characters ... */)
/// ```
pub const DEFAULT_LOOKBACK_WINDOW: usize = 2000;

/// Maximum bytes walked back over a computed key looking for its `[`.
///
/// Computed keys are accepted but not parsed; past this bound the key is
/// reported as the closing `]` alone.
pub const MAX_COMPUTED_KEY_LEN: usize = 256;

/// A backward scan bound measured in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Lookback(pub usize);

impl Default for Lookback {
    fn default() -> Self {
        Lookback(DEFAULT_LOOKBACK_WINDOW)
    }
}

impl Lookback {
    /// Number of characters in the window.
    #[inline]
    pub fn chars(self) -> usize {
        self.0
    }

    /// Byte offset of the lowest position the window reaches from `cursor`.
    ///
    /// Walks back at most `self.0` characters so the result is always a
    /// character boundary of `text`. A `cursor` past the end or inside a
    /// multi-byte character is clamped down to the previous boundary first.
    pub fn floor(self, text: &str, cursor: usize) -> usize {
        let mut end = cursor.min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if self.0 == 0 {
            return end;
        }
        text[..end]
            .char_indices()
            .rev()
            .take(self.0)
            .last()
            .map_or(end, |(idx, _)| idx)
    }
}

#[cfg(test)]
#[path = "../tests/limits_tests.rs"]
mod limits_tests;
