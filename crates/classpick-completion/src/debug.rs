//! Optional debug message sink.
//!
//! Extractors describe why a request matched or not ("No functions called",
//! "Found object property: [primary]"). Hosts may inject a callback to
//! receive those messages, for example to append them to a log file. The
//! messages are also emitted as `tracing` events on the `classpick::debug`
//! target. Neither is needed for extraction to work.

use std::fmt;
use std::sync::Arc;

use tracing::Level;

type DebugFn = dyn Fn(&str) + Send + Sync;

/// A cheaply clonable, optional debug callback.
#[derive(Clone, Default)]
pub struct DebugSink(Option<Arc<DebugFn>>);

impl DebugSink {
    pub fn new(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        DebugSink(Some(Arc::new(callback)))
    }

    /// A sink that only forwards to `tracing`.
    pub fn none() -> Self {
        DebugSink(None)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Emit a message. The message is only built when someone listens.
    pub fn emit(&self, message: impl FnOnce() -> String) {
        let callback = self.0.as_deref();
        if callback.is_none() && !tracing::enabled!(target: "classpick::debug", Level::DEBUG) {
            return;
        }
        let message = message();
        tracing::debug!(target: "classpick::debug", "{message}");
        if let Some(callback) = callback {
            callback(&message);
        }
    }
}

impl fmt::Debug for DebugSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DebugSink")
            .field(&if self.is_set() { "callback" } else { "none" })
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/debug_tests.rs"]
mod debug_tests;
