//! # Append-only error collector.
//!
//! [`ErrorSink`] accumulates [`StageError`]s from concurrently running task
//! runners. Failures manifest to pipeline consumers as items that vanish from
//! the output stream plus entries here; the sink is how "dropped due to task
//! failure" is distinguished from "in flight".
//!
//! ## Rules
//! - Appends from multiple runners must never corrupt or lose entries.
//! - No deduplication; insertion order across concurrent appenders is
//!   unspecified.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StageError;

/// Concurrency-safe, append-only collector of stage errors.
///
/// Cheap to clone (internally holds an `Arc`-backed list); all clones share
/// the same entries.
#[derive(Clone, Default)]
pub struct ErrorSink {
    entries: Arc<Mutex<Vec<StageError>>>,
}

impl ErrorSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one error. Never blocks on anything but the internal lock.
    pub fn append(&self, err: StageError) {
        // A poisoned lock must not lose errors: take the inner data anyway.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(err);
    }

    /// Removes and returns all accumulated errors.
    pub fn drain(&self) -> Vec<StageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *entries)
    }

    /// Number of accumulated errors.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no errors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
