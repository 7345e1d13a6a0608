//! # Unit of work flowing through a stage.
//!
//! This module defines the [`Item`] trait and its shared handle type
//! [`ItemRef`], an `Arc<dyn Item>` suitable for moving through channels.
//!
//! An item is opaque to the stage: the stage only ever clones it, announces
//! it, marks it processed, and forwards it. Payload access is the tasks'
//! business, via [`Item::as_any`].
//!
//! ## Ownership
//! - The stage owns the **original** for the duration of one fan-out.
//! - Each task runner owns its **clone** exclusively until it reports an
//!   outcome.

use std::any::Any;
use std::sync::Arc;

/// Shared handle to an item (`Arc<dyn Item>`).
///
/// Forwarding preserves identity: the handle observed downstream is
/// pointer-equal (`Arc::ptr_eq`) to the one that was admitted, never a clone.
pub type ItemRef = Arc<dyn Item>;

/// # Opaque unit of payload data traversing a pipeline.
///
/// ## Contract
/// - [`clone_item`](Item::clone_item) produces an **independent** copy:
///   mutations performed through the copy must never be visible through the
///   original.
/// - [`mark_processed`](Item::mark_processed) is an **idempotent** transition
///   to a terminal bookkeeping state. The stage calls it exactly once per
///   clone and exactly once per original; implementations must tolerate
///   additional calls without corrupting state.
///
/// # Example
/// ```
/// use std::any::Any;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use fanvisor::{Item, ItemRef};
///
/// struct Payload {
///     body: String,
///     processed: AtomicBool,
/// }
///
/// impl Item for Payload {
///     fn clone_item(&self) -> ItemRef {
///         Arc::new(Payload {
///             body: self.body.clone(),
///             processed: AtomicBool::new(false),
///         })
///     }
///
///     fn mark_processed(&self) {
///         self.processed.store(true, Ordering::SeqCst);
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let item: ItemRef = Arc::new(Payload {
///     body: "hello".into(),
///     processed: AtomicBool::new(false),
/// });
/// let copy = item.clone_item();
/// assert!(!Arc::ptr_eq(&item, &copy));
/// ```
pub trait Item: Send + Sync + 'static {
    /// Returns an independent deep copy with no shared mutable state.
    fn clone_item(&self) -> ItemRef;

    /// Transitions the item to its terminal bookkeeping state. Idempotent.
    fn mark_processed(&self);

    /// Concrete payload access for tasks.
    fn as_any(&self) -> &dyn Any;
}
