//! # Shared cross-task state store.
//!
//! [`Registry`] is a concurrency-safe, key-based lookup available to every
//! task in a stage for cross-task coordination. The schema is caller-defined:
//! values are stored as `Arc<dyn Any + Send + Sync>` and retrieved with a
//! typed [`Registry::get`].
//!
//! ## Rules
//! - The registry is the **only** resource the stage shares across concurrent
//!   runners; it carries its own synchronization (`tokio::sync::RwLock`).
//! - Entries are immutable once inserted; shared mutable state belongs inside
//!   the stored value (atomics, locks) where the caller controls it.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Concurrency-safe key-based store shared by all tasks of a stage.
///
/// Cheap to clone (internally holds an `Arc`-backed map).
#[derive(Clone, Default)]
pub struct Registry {
    entries: Arc<RwLock<HashMap<String, Arc<dyn Any + Send + Sync>>>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub async fn insert<T: Send + Sync + 'static>(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.write().await;
        entries.insert(key.into(), Arc::new(value));
    }

    /// Returns the entry under `key` if present **and** of type `T`.
    pub async fn get<T: Send + Sync + 'static>(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read().await;
        let value = entries.get(key)?.clone();
        value.downcast::<T>().ok()
    }

    /// Removes the entry under `key`; returns whether one existed.
    pub async fn remove(&self, key: &str) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(key).is_some()
    }

    /// True if an entry exists under `key` (regardless of its type).
    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True if the registry holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
