//! # Reduced capability view handed to tasks.
//!
//! [`TaskParams`] is what a [`Task`](crate::Task) sees of the stage: the two
//! outbound notification channels and the shared registry. It deliberately
//! excludes the stage's input, output, and requeue handles so tasks cannot
//! bypass the executor's coordination.

use tokio::sync::mpsc;

use crate::item::ItemRef;
use crate::shared::Registry;

/// Capabilities exposed to a task while it processes one clone.
///
/// Cheap to clone; all fields are `Arc`-backed handles.
#[derive(Clone)]
pub struct TaskParams {
    new_items: mpsc::Sender<ItemRef>,
    processed: mpsc::Sender<ItemRef>,
    registry: Registry,
}

impl TaskParams {
    /// Creates a new reduced view.
    ///
    /// Usually derived from
    /// [`StageParams::task_params`](crate::StageParams::task_params); building
    /// one directly is useful for exercising a task outside a stage.
    pub fn new(
        new_items: mpsc::Sender<ItemRef>,
        processed: mpsc::Sender<ItemRef>,
        registry: Registry,
    ) -> Self {
        Self {
            new_items,
            processed,
            registry,
        }
    }

    /// Channel on which a task may publish items it creates.
    pub fn new_items(&self) -> &mpsc::Sender<ItemRef> {
        &self.new_items
    }

    /// Channel announcing items whose processing has resolved.
    pub fn processed(&self) -> &mpsc::Sender<ItemRef> {
        &self.processed
    }

    /// Shared cross-task state store.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
