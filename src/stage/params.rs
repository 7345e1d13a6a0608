//! # Full capability set handed to a running stage.
//!
//! [`StageParams`] bundles every handle a stage needs for one `run`: the item
//! channels, the error sink, the shared registry, and the requeue queue. The
//! surrounding pipeline constructs it, wires the channel ends, and passes it
//! to [`Stage::run`](crate::Stage::run) by value; the stage owns the input
//! receiver for its whole run.
//!
//! Tasks never see this type; they get the reduced
//! [`TaskParams`](crate::TaskParams) view derived by
//! [`StageParams::task_params`].

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::item::ItemRef;
use crate::shared::{ErrorSink, Registry, RequeueQueue};
use crate::tasks::TaskParams;

/// Capabilities held by a stage's event loop.
pub struct StageParams {
    position: usize,
    input: mpsc::Receiver<ItemRef>,
    output: mpsc::Sender<ItemRef>,
    new_items: mpsc::Sender<ItemRef>,
    processed: mpsc::Sender<ItemRef>,
    errors: ErrorSink,
    registry: Registry,
    queue: Arc<RequeueQueue>,
}

impl StageParams {
    /// Creates the capability set for one stage run.
    ///
    /// ### Parameters
    /// - `position`: the stage's position in the pipeline, used to tag sink
    ///   entries
    /// - `input`: receive-only stream of admitted items; closing it signals
    ///   upstream completion
    /// - `output`: send-only stream to the downstream stage; a blocking send
    ///   is the backpressure mechanism
    /// - `new_items`: announcement channel for every clone created during
    ///   fan-out
    /// - `processed`: announcement channel for every clone and original whose
    ///   processing has resolved
    /// - `errors`: append-only sink for position-tagged task failures
    /// - `registry`: cross-task shared state store
    /// - `queue`: out-of-band admission source
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: usize,
        input: mpsc::Receiver<ItemRef>,
        output: mpsc::Sender<ItemRef>,
        new_items: mpsc::Sender<ItemRef>,
        processed: mpsc::Sender<ItemRef>,
        errors: ErrorSink,
        registry: Registry,
        queue: Arc<RequeueQueue>,
    ) -> Self {
        Self {
            position,
            input,
            output,
            new_items,
            processed,
            errors,
            registry,
            queue,
        }
    }

    /// The stage's position in the pipeline.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Mutable access to the input receiver (the loop's direct source).
    pub fn input_mut(&mut self) -> &mut mpsc::Receiver<ItemRef> {
        &mut self.input
    }

    /// Downstream output channel.
    pub fn output(&self) -> &mpsc::Sender<ItemRef> {
        &self.output
    }

    /// New-item announcement channel.
    pub fn new_items(&self) -> &mpsc::Sender<ItemRef> {
        &self.new_items
    }

    /// Processed-item announcement channel.
    pub fn processed(&self) -> &mpsc::Sender<ItemRef> {
        &self.processed
    }

    /// Error sink shared with the stage's runners.
    pub fn errors(&self) -> &ErrorSink {
        &self.errors
    }

    /// Cross-task shared state store.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Out-of-band admission source.
    pub fn queue(&self) -> &Arc<RequeueQueue> {
        &self.queue
    }

    /// Derives the reduced capability view handed to tasks.
    pub fn task_params(&self) -> TaskParams {
        TaskParams::new(
            self.new_items.clone(),
            self.processed.clone(),
            self.registry.clone(),
        )
    }
}
