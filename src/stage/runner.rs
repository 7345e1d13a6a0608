//! # Run a single task against one cloned item.
//!
//! Executes one [`Task`](crate::Task) for one fan-out, records failures in
//! the [`ErrorSink`](crate::ErrorSink), and reports the outcome on the
//! fan-out's completion channel.
//!
//! ## Rules
//! - A failing task is recorded, not retried, and never aborts its siblings.
//! - Regardless of outcome, the runner announces its clone on the processed
//!   channel, marks the clone processed, and posts exactly one completion
//!   signal; the join barrier counts on receiving one signal per runner.
//! - Panics inside the task are caught and recorded as failures; the
//!   completion signal is still posted.
//! - Send errors on the externally-owned channels are ignored: the executor
//!   may have abandoned this fan-out, and the clone's bookkeeping must
//!   complete anyway.

use std::any::Any;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::error::{StageError, TaskError};
use crate::item::ItemRef;
use crate::shared::ErrorSink;
use crate::tasks::{TaskParams, TaskRef};

/// Executes `task` against `clone`, then reports on `done`.
///
/// The completion signal carries `Some(item)` on success and `None` on
/// failure; the executor only inspects which of the two it is.
pub(crate) async fn run_task(
    ctx: CancellationToken,
    task: TaskRef,
    clone: ItemRef,
    params: TaskParams,
    errors: ErrorSink,
    position: usize,
    done: mpsc::Sender<Option<ItemRef>>,
) {
    let fut = task.process(ctx, Arc::clone(&clone), &params);
    let result = match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => Err(TaskError::fail(format!(
            "task panicked: {}",
            panic_message(panic.as_ref())
        ))),
    };

    let outcome = match result {
        Ok(item) => Some(item),
        Err(source) => {
            warn!(
                task = task.name(),
                position,
                error = %source,
                "task failed"
            );
            errors.append(StageError::Task { position, source });
            None
        }
    };

    // The done send comes last: it is the signal that this clone's
    // bookkeeping has fully resolved.
    let _ = params.processed().send(Arc::clone(&clone)).await;
    clone.mark_processed();
    let _ = done.send(outcome).await;
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
